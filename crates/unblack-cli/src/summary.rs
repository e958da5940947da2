use console::Style;
use unblack_core::io::pnm::{PnmHeader, PnmKind};

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_pnm_summary(source: &str, header: &PnmHeader) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("PNM Image"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(9)));
    println!();

    println!("  {:<14}{}", s.label.apply_to("Source"), s.path.apply_to(source));
    println!("  {:<14}{}", s.label.apply_to("Kind"), s.value.apply_to(header.kind));
    println!(
        "  {:<14}{}",
        s.label.apply_to("Encoding"),
        s.value.apply_to(header.encoding)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Dimensions"),
        s.value.apply_to(format!("{}x{}", header.width, header.height))
    );
    if header.kind == PnmKind::Graymap {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Max value"),
            s.value.apply_to(header.max_value)
        );
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Pixels"),
        s.value.apply_to(header.pixel_count())
    );
    println!();
}
