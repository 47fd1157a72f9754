use dioxus::prelude::*;

const BASE_CLASS: &str = "px-4 py-2 rounded-md font-medium focus:outline-none transition";
const SOLID_CLASS: &str = "bg-blue-600 text-white hover:bg-blue-700";
const OUTLINE_CLASS: &str =
    "border border-gray-300 text-gray-700 hover:bg-gray-50 dark:border-gray-600 dark:text-gray-200";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Solid,
    Outline,
}

impl ButtonVariant {
    /// Anything other than `"outline"` is solid.
    pub fn from_name(name: &str) -> Self {
        match name {
            "outline" => ButtonVariant::Outline,
            _ => ButtonVariant::Solid,
        }
    }

    pub fn class(self) -> String {
        let variant = match self {
            ButtonVariant::Solid => SOLID_CLASS,
            ButtonVariant::Outline => OUTLINE_CLASS,
        };
        format!("{} {}", BASE_CLASS, variant)
    }
}

impl From<&str> for ButtonVariant {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl From<String> for ButtonVariant {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

#[component]
pub fn Button(
    #[props(default, into)] variant: ButtonVariant,
    #[props(default = "button".to_string(), into)] button_type: String,
    #[props(default)] disabled: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element
) -> Element {
    rsx! {
        button {
            class: variant.class(),
            r#type: "{button_type}",
            disabled: disabled,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_variants() {
        assert_eq!(ButtonVariant::from("solid"), ButtonVariant::Solid);
        assert_eq!(ButtonVariant::from("outline"), ButtonVariant::Outline);
        assert_eq!(ButtonVariant::default(), ButtonVariant::Solid);
    }

    #[test]
    fn test_unknown_variant_renders_solid() {
        for name in ["", "ghost", "OUTLINE", "outline ", "link"] {
            let variant = ButtonVariant::from(name.to_string());
            assert_eq!(variant, ButtonVariant::Solid);
            assert_eq!(variant.class(), ButtonVariant::Solid.class());
        }
    }

    #[test]
    fn test_variant_classes_are_exclusive() {
        let solid = ButtonVariant::Solid.class();
        let outline = ButtonVariant::Outline.class();
        assert!(solid.starts_with(BASE_CLASS) && outline.starts_with(BASE_CLASS));
        assert!(solid.contains("bg-blue-600") && !solid.contains("border-gray-300"));
        assert!(outline.contains("border-gray-300") && !outline.contains("bg-blue-600"));
    }
}
