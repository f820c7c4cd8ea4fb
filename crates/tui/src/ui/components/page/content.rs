//! Static page bodies shown under the bar.
//!
//! The shell only owns navigation; these bodies stand in for the routed pages
//! so there is something to scroll. The landing page opens with a hero band
//! that the transparent bar sits on.

use vassa_types::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Row of the landing hero backdrop.
    Hero,
    Heading,
    Body,
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLine {
    pub kind: LineKind,
    pub text: String,
}

impl PageLine {
    fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self { kind, text: text.into() }
    }

    fn blank() -> Self {
        Self::new(LineKind::Blank, "")
    }
}

/// Rows of the landing hero band.
pub const HERO_ROWS: usize = 24;

const FEATURED: &[(&str, &str, &str)] = &[
    ("Lakeview Residency", "Baneshwor, Kathmandu", "3 BHK apartment, furnished"),
    ("Maple Court", "Lalitpur", "Family house with garden"),
    ("Riverside Lofts", "Pokhara", "2 BHK loft near the lake"),
    ("Summit Heights", "Budhanilkantha", "Villa with mountain views"),
    ("Greenfield Homes", "Bhaktapur", "Gated community, 4 BHK"),
    ("City Square Suites", "Thamel", "Studio, walk to everything"),
    ("Harbor Point", "Chitwan", "Bungalow with private yard"),
    ("Oakwood Terrace", "Kirtipur", "Townhouse, two parking spaces"),
    ("Bluebell Flats", "Jhamsikhel", "1 BHK, rooftop access"),
    ("Cedar Grove", "Dhulikhel", "Cottage on two ropani of land"),
    ("Temple View", "Patan Durbar Square", "Heritage home, restored"),
    ("Northgate Plaza", "Maharajgunj", "Office floor, 2,400 sq ft"),
];

const PROJECTS: &[(&str, &str)] = &[
    ("Vassa Enclave", "Phase II bookings open"),
    ("Sunrise Towers", "Ready to move in"),
    ("Hillside Commons", "Under construction, completion next spring"),
];

/// Body for a route.
pub fn page_lines(route: &Route) -> Vec<PageLine> {
    match route {
        Route::Landing => landing(),
        Route::About => simple_page(
            "About Us",
            &[
                "Vassa Properties connects buyers, renters and owners across the valley.",
                "Every listing is reviewed by a local agent before it goes live.",
                "We never charge owners to list a property.",
            ],
        ),
        Route::FindHome => listing_page("Find Property", FEATURED),
        Route::FindProject => {
            let mut lines = vec![PageLine::new(LineKind::Heading, "Projects"), PageLine::blank()];
            for (name, status) in PROJECTS {
                lines.push(PageLine::new(LineKind::Body, format!("{name}  ·  {status}")));
            }
            lines
        }
        Route::Contact => simple_page(
            "Contact",
            &[
                "Office: Baneshwor, Kathmandu",
                "Phone: +977 1 555 0100",
                "Email: hello@vassaproperties.com",
            ],
        ),
        Route::List => simple_page(
            "List Properties",
            &[
                "Listing is free. Add photos, a price and a short description.",
                "Your listing appears in search once an agent has verified it.",
            ],
        ),
        Route::YourProperties => simple_page(
            "Your Properties",
            &["Properties you have listed appear here."],
        ),
        Route::Other(path) => {
            let message = format!("Nothing lives at {path}.");
            simple_page("Not found", &[message.as_str()])
        }
    }
}

fn landing() -> Vec<PageLine> {
    let mut lines = Vec::with_capacity(160);
    let headline_row = HERO_ROWS / 2 - 1;
    for row in 0..HERO_ROWS {
        let text = match row {
            r if r == headline_row => "Find a place you will love to live",
            r if r == headline_row + 1 => "Homes, apartments and projects across Nepal",
            _ => "",
        };
        lines.push(PageLine::new(LineKind::Hero, text));
    }
    lines.push(PageLine::blank());
    lines.extend(listing_page("Featured properties", FEATURED));
    lines.push(PageLine::blank());
    lines.push(PageLine::new(LineKind::Heading, "Upcoming projects"));
    lines.push(PageLine::blank());
    for (name, status) in PROJECTS {
        lines.push(PageLine::new(LineKind::Body, format!("{name}  ·  {status}")));
        lines.push(PageLine::blank());
    }
    lines.push(PageLine::new(LineKind::Heading, "Why Vassa"));
    lines.push(PageLine::blank());
    for reason in [
        "Verified listings only",
        "Agents who know the neighbourhood",
        "Free listing for owners",
        "Transparent pricing",
    ] {
        lines.push(PageLine::new(LineKind::Body, format!("• {reason}")));
    }
    lines.push(PageLine::blank());
    lines.push(PageLine::new(LineKind::Body, "© Vassa Properties"));
    lines
}

fn listing_page(title: &str, listings: &[(&str, &str, &str)]) -> Vec<PageLine> {
    let mut lines = vec![PageLine::new(LineKind::Heading, title), PageLine::blank()];
    for (name, area, summary) in listings {
        lines.push(PageLine::new(LineKind::Body, format!("┌ {name}")));
        lines.push(PageLine::new(LineKind::Body, format!("│ {area}")));
        lines.push(PageLine::new(LineKind::Body, format!("│ {summary}")));
        lines.push(PageLine::new(LineKind::Body, "└ View details"));
        lines.push(PageLine::blank());
        lines.push(PageLine::blank());
    }
    lines
}

fn simple_page(title: &str, paragraphs: &[&str]) -> Vec<PageLine> {
    let mut lines = vec![PageLine::new(LineKind::Heading, title), PageLine::blank()];
    for paragraph in paragraphs {
        lines.push(PageLine::new(LineKind::Body, *paragraph));
        lines.push(PageLine::blank());
    }
    lines
}
