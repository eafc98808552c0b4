use console::Style;
use nomz::area::{area_defs, classify};
use nomz::model::Restaurant;
use nomz::store::{AreaSummary, Stats};
use once_cell::sync::Lazy;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 36;
const AREA_WIDTH: usize = 16;

struct Palette {
    dim: Style,
    warn: Style,
    accent: Style,
    title: Style,
}

static PALETTE: Lazy<Palette> = Lazy::new(|| Palette {
    dim: Style::new().dim(),
    warn: Style::new().yellow(),
    accent: Style::new().cyan(),
    title: Style::new().bold(),
});

pub(crate) fn print_warnings(warnings: &[String]) {
    for warning in warnings {
        eprintln!("{}", PALETTE.warn.apply_to(warning));
    }
}

pub(crate) fn print_restaurants(records: &[&Restaurant]) {
    if records.is_empty() {
        println!("No restaurants found.");
        return;
    }

    for r in records {
        let name = pad_to_width(&r.name, NAME_WIDTH);
        let area = pad_to_width(classify(&r.postal_code, area_defs()), AREA_WIDTH);
        println!(
            "{:>4}. {} {} {:.1} {}",
            PALETTE.accent.apply_to(r.id),
            name,
            PALETTE.dim.apply_to(area),
            r.rating,
            PALETTE.dim.apply_to(format!("({} reviews)", r.review_count)),
        );
    }
}

pub(crate) fn print_detail(r: &Restaurant) {
    let title = &PALETTE.title;
    let dim = &PALETTE.dim;

    println!("{} {}", title.apply_to(&r.name), dim.apply_to(&r.cuisine));
    println!("--------------------------------");
    println!("{}", r.address);
    println!("Rated {:.1} from {} reviews", r.rating, r.review_count);

    match &r.working_hours {
        Some(hours) => {
            println!();
            for (day, span) in hours {
                println!("  {:<10} {}", day, span);
            }
        }
        None => println!("{}", dim.apply_to("Hours not listed")),
    }

    match &r.website {
        Some(site) => println!("{}", site),
        None => println!("{}", dim.apply_to("No website listed")),
    }
}

pub(crate) fn print_areas<I: Iterator<Item = AreaSummary>>(areas: I) {
    for area in areas {
        println!(
            "{} {} ({})",
            pad_to_width(&area.id, AREA_WIDTH),
            area.name,
            area.member_count
        );
    }
}

pub(crate) fn print_stats(stats: &Stats) {
    println!("Total restaurants: {}", stats.total);
    println!("Average rating:    {:.2}", stats.average_rating);
    println!();
    for (area_id, count) in &stats.per_area {
        println!("  {} {}", pad_to_width(area_id, AREA_WIDTH), count);
    }
}

fn pad_to_width(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width);
    let pad = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(pad))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
