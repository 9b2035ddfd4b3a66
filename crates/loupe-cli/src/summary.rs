use std::path::Path;

use console::Style;
use loupe_core::dispatch::PanelEntry;
use loupe_core::record::PhotoRecord;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    side: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            side: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_photo_summary(path: &Path, record: &PhotoRecord, entries: &[PanelEntry]) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Loupe Photo"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(11)));
    println!();

    println!(
        "  {:<22}{}",
        s.label.apply_to("Record"),
        s.path.apply_to(path.display())
    );
    if let Some(ref alt) = record.alt {
        println!("  {:<22}{}", s.label.apply_to("Description"), s.value.apply_to(alt));
    }

    let sides = record.available_sides();
    if sides.is_empty() {
        println!(
            "  {:<22}{}",
            s.label.apply_to("Sides"),
            s.disabled.apply_to("no images")
        );
    } else {
        let names: Vec<String> = sides.iter().map(ToString::to_string).collect();
        println!(
            "  {:<22}{}",
            s.label.apply_to("Sides"),
            s.side.apply_to(names.join(", "))
        );
    }
    println!();

    // Metadata
    println!("  {}", s.header.apply_to("Photo"));
    for (label, value) in record.metadata_entries() {
        println!("    {:<22}{}", s.label.apply_to(label), s.value.apply_to(value));
    }
    println!();

    // Analyses
    println!("  {}", s.header.apply_to("Analyses"));
    if entries.is_empty() {
        println!("    {}", s.disabled.apply_to("none"));
    }
    for entry in entries {
        for (i, line) in entry.value.lines().into_iter().enumerate() {
            let label = if i == 0 { entry.label.as_str() } else { "" };
            println!(
                "    {:<32}{}",
                s.label.apply_to(label),
                s.value.apply_to(line)
            );
        }
    }
    println!();
}
