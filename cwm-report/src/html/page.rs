use maud::{html, Markup, PreEscaped, DOCTYPE};

const MAIN_CSS: &str = "
body { font-family: sans-serif; margin: 0 auto; max-width: 960px; padding: 0 1em; }
#map { height: 500px; }
section.chart svg { max-width: 100%; }
article.listing dt { font-weight: bold; }
article.listing dd { margin: 0 0 0.5em 1em; }
footer { color: #777; font-size: small; margin: 2em 0; }
";

pub fn page(title: &str, h: Option<Markup>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="fr" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1, shrink-to-fit=no";
                title { (title) }
                style { (PreEscaped(MAIN_CSS)) }
                @if let Some(h) = h {
                   (h)
                }
            }
            body {
                (content)
            }
        }
    }
}
