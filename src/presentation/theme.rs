use colored::Colorize;

pub struct Theme {
    pub title: fn(&str) -> String,
    pub prompt: fn(&str) -> String,
    pub name: fn(&str) -> String,
    pub uid: fn(&str) -> String,
    pub gloss: fn(&str) -> String,
    pub idx: fn(&str) -> String,
    pub line: fn(&str) -> String,
}

impl Theme {
    pub fn from_name(name: &str) -> Self {
        match name {
            "temp" | "" => Self::temp(),
            "wudao" => Self::wudao(),
            "canvas" => Self::canvas(),
            _ => {
                eprintln!("{}", format!("✘ Unknown theme: {}", name).red());
                Self::temp() // Fallback to default
            }
        }
    }

    fn temp() -> Self {
        Self {
            title: |s| s.bright_magenta().italic().bold().underline().to_string(),
            prompt: |s| s.bright_white().to_string(),
            name: |s| s.white().to_string(),
            uid: |s| s.cyan().to_string(),
            gloss: |s| s.bright_white().dimmed().italic().to_string(),
            idx: |s| s.bright_white().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
        }
    }

    fn wudao() -> Self {
        Self {
            title: |s| s.red().italic().bold().underline().to_string(),
            prompt: |s| s.green().to_string(),
            name: |s| s.white().to_string(),
            uid: |s| s.cyan().to_string(),
            gloss: |s| s.bright_yellow().dimmed().italic().to_string(),
            idx: |s| s.bright_white().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
        }
    }

    fn canvas() -> Self {
        Self {
            title: |s| s.blue().bold().underline().to_string(),
            prompt: |s| s.bright_cyan().bold().to_string(),
            name: |s| s.black().to_string(),
            uid: |s| s.magenta().to_string(),
            gloss: |s| s.bright_black().italic().to_string(),
            idx: |s| s.cyan().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
        }
    }
}
