use colored::*;

pub struct LogColors {}

impl LogColors {
    pub fn purple(text: &str) -> String {
        // #4B3978
        let purple = Color::TrueColor {
            r: 75,
            g: 57,
            b: 120,
        };

        text.color(purple).to_string()
    }

    pub fn green(text: &str) -> String {
        // #04cd9b
        let green = Color::TrueColor {
            r: 4,
            g: 205,
            b: 155,
        };

        text.color(green).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors_keep_text() {
        colored::control::set_override(true);
        let purple = LogColors::purple("storage");
        let green = LogColors::green("storage");
        let expected_purple = "storage"
            .color(Color::TrueColor {
                r: 75,
                g: 57,
                b: 120,
            })
            .to_string();
        let expected_green = "storage"
            .color(Color::TrueColor {
                r: 4,
                g: 205,
                b: 155,
            })
            .to_string();
        colored::control::unset_override();

        // the exact escape depends on terminal truecolor support
        assert_eq!(purple, expected_purple);
        assert_eq!(green, expected_green);
        assert!(purple.contains("storage"));
        assert!(purple.starts_with("\x1b["));
        assert_ne!(purple, "storage");
    }
}
