mod about;
mod contact;
mod education;
mod experience;
mod hero;
mod navbar;
mod portfolio;
mod projects;
mod skills;

pub use about::About;
pub use contact::{ Contact, Footer };
pub use education::{ Achievements, Education };
pub use experience::Experience;
pub use hero::Hero;
pub use navbar::Navbar;
pub use portfolio::{ root_class, PortfolioPage };
pub use projects::Projects;
pub use skills::Skills;
