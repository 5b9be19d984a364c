use colored::Colorize;

pub fn status(message: impl AsRef<str>) {
    eprintln!("{} {}", "==>".blue().bold(), message.as_ref());
}

pub fn success(message: impl AsRef<str>) {
    eprintln!("{} {}", "ok".green().bold(), message.as_ref());
}

pub fn warn(message: impl AsRef<str>) {
    eprintln!("{} {}", "warn".yellow().bold(), message.as_ref());
}

pub fn error(message: impl AsRef<str>) {
    eprintln!("{} {}", "error".red().bold(), message.as_ref());
}

pub fn event(name: &str, payload: &str) {
    eprintln!("{} {} {}", "event".magenta().bold(), name.bold(), payload);
}
