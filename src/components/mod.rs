mod button;
mod card;
mod reveal;

pub use button::{ Button, ButtonVariant };
pub use card::{ Card, CARD_CLASS };
pub use reveal::{ Motion, Reveal, RevealSection, Trigger };
