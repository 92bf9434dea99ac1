use clearaddress::{Address, FormattedPremise, PremiseRule};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_premise(address: &Address, rule: PremiseRule, premise: &FormattedPremise, color: bool) {
    let palette = ansi::Palette::new(color);

    let heading =
        if premise.premise.is_empty() { "(no premise)".to_string() } else { premise.premise.clone() };
    println!("\n{}", palette.bold(palette.paint(format!("⌂  {heading}"), ansi::CYAN)));
    println!("  {} {}", palette.dim("rule:"), palette.paint(rule.label(), ansi::YELLOW));

    println!("\n{}", palette.paint("━━━ Address ━━━", ansi::GRAY));

    let premise_lines = [&premise.line_1, &premise.line_2, &premise.line_3];
    let blank = premise_lines.iter().all(|line| line.is_empty())
        && address.post_town.is_empty()
        && address.postcode.is_empty();
    if blank {
        println!("{}", palette.dim("  No address lines"));
        println!();
        return;
    }

    for line in premise_lines {
        if !line.is_empty() {
            println!("  {}", palette.paint(line, ansi::GREEN));
        }
    }
    // Post towns print in capitals.
    if !address.post_town.is_empty() {
        println!("  {}", palette.paint(address.post_town.to_uppercase(), ansi::GREEN));
    }
    if !address.postcode.is_empty() {
        println!("  {}", palette.bold(palette.paint(&address.postcode, ansi::GREEN)));
    }
    println!();
}
