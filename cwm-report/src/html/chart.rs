use maud::{html, Markup};

const BAR_WIDTH: usize = 36;
const BAR_GAP: usize = 12;
const PLOT_HEIGHT: usize = 200;
const AXIS_MARGIN: usize = 40;
const TOP_MARGIN: usize = 20;
const LABEL_HEIGHT: usize = 30;
const ROTATED_LABEL_HEIGHT: usize = 180;
const BAR_COLOR: &str = "#4c72b0";

/// Vertical bar chart as inline SVG.
///
/// Labels below the bars are rotated by 90 degrees if `rotate_labels` is set.
pub fn bar_chart<'a>(
    bars: impl IntoIterator<Item = (&'a str, usize)>,
    rotate_labels: bool,
) -> Markup {
    let bars: Vec<_> = bars.into_iter().collect();
    if bars.is_empty() {
        return html! { p class="no-data" { "Aucune donnée" } };
    }
    let max = bars.iter().map(|(_, n)| *n).max().unwrap_or(0).max(1);
    let label_height = if rotate_labels {
        ROTATED_LABEL_HEIGHT
    } else {
        LABEL_HEIGHT
    };
    let width = AXIS_MARGIN + bars.len() * (BAR_WIDTH + BAR_GAP) + BAR_GAP;
    let baseline = TOP_MARGIN + PLOT_HEIGHT;
    let height = baseline + label_height;

    html! {
        svg
            xmlns="http://www.w3.org/2000/svg"
            width=(width)
            height=(height)
            viewBox=(format!("0 0 {width} {height}"))
            role="img" {
            line x1=(AXIS_MARGIN) y1=(TOP_MARGIN) x2=(AXIS_MARGIN) y2=(baseline) stroke="black" {}
            line x1=(AXIS_MARGIN) y1=(baseline) x2=(width) y2=(baseline) stroke="black" {}
            text x=(AXIS_MARGIN - 4) y=(TOP_MARGIN + 4) text-anchor="end" font-size="11" { (max) }
            text x=(AXIS_MARGIN - 4) y=(baseline) text-anchor="end" font-size="11" { "0" }
            @for (i, (label, count)) in bars.iter().enumerate() {
                @let bar_height = count * PLOT_HEIGHT / max;
                @let x = AXIS_MARGIN + BAR_GAP + i * (BAR_WIDTH + BAR_GAP);
                @let center = x + BAR_WIDTH / 2;
                rect x=(x) y=(baseline - bar_height) width=(BAR_WIDTH) height=(bar_height) fill=(BAR_COLOR) {
                    title { (label) ": " (count) }
                }
                text x=(center) y=(baseline - bar_height - 4) text-anchor="middle" font-size="11" { (count) }
                @if rotate_labels {
                    text
                        x=(center)
                        y=(baseline + 8)
                        text-anchor="end"
                        dominant-baseline="middle"
                        font-size="11"
                        transform=(format!("rotate(-90 {center} {})", baseline + 8)) {
                        (label)
                    }
                } @else {
                    text x=(center) y=(baseline + 18) text-anchor="middle" font-size="11" { (label) }
                }
            }
        }
    }
}
