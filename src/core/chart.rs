use serde::Serialize;

/// Proportional widths for the two segments of a breakdown bar, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentSplit {
    pub first_percent: f64,
    pub second_percent: f64,
}

/// A host-owned two-segment bar the engine can size but does not draw.
pub trait ChartRegion {
    fn set_segment_widths(&mut self, first_percent: f64, second_percent: f64);
}

/// Resolves a lookup key to a chart region, if the page has one.
pub trait ChartHost {
    fn region(&mut self, key: &str) -> Option<&mut dyn ChartRegion>;
}

/// Splits a two-way decomposition of a total into percentages summing to 100.
/// A non-positive total yields a neutral 50/50 split.
pub fn proportional_split(first: f64, second: f64) -> SegmentSplit {
    let total = first + second;
    if total > 0.0 {
        SegmentSplit {
            first_percent: first / total * 100.0,
            second_percent: second / total * 100.0,
        }
    } else {
        SegmentSplit {
            first_percent: 50.0,
            second_percent: 50.0,
        }
    }
}

pub fn render_breakdown(region: &mut dyn ChartRegion, first: f64, second: f64) {
    let split = proportional_split(first, second);
    region.set_segment_widths(split.first_percent, split.second_percent);
}

/// Looks the region up by key first. A key that resolves to nothing is
/// skipped, matching the tolerant binding policy of the harness.
pub fn render_breakdown_by_key(host: &mut dyn ChartHost, key: &str, first: f64, second: f64) {
    if let Some(region) = host.region(key) {
        render_breakdown(region, first, second);
    }
}
