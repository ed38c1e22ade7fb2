use super::types::{SUB_EVENTS, round_hundredths};

/// Hours added between consecutive sub-events of one charging session.
pub const SUB_EVENT_STEP_HOURS: f64 = 0.2;

/// Expands each raw arrival into [`SUB_EVENTS`] closely spaced readings.
///
/// The step accumulates on a running value (`v += 0.2`), and each emitted
/// reading is rounded to hundredths. All sub-events of one arrival precede
/// those of the next.
///
/// # Examples
///
/// ```
/// use evc_datagen::generator::expander::expand_events;
///
/// assert_eq!(expand_events(&[9.0]), vec![9.0, 9.2, 9.4, 9.6, 9.8]);
/// ```
pub fn expand_events(raw: &[f64]) -> Vec<f64> {
    raw.iter()
        .flat_map(|&start| {
            let mut v = start;
            (0..SUB_EVENTS).map(move |_| {
                let reading = round_hundredths(v);
                v += SUB_EVENT_STEP_HOURS;
                reading
            })
        })
        .collect()
}
