//! Animation plan for drawing a change result one coin at a time.
//!
//! Pure timing only: the front end decides how a frame is drawn.

use serde::Serialize;

use crate::models::change::ChangeResult;
use crate::models::denomination::Denomination;

/// One coin to draw, `at_ms` after the animation starts.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Frame {
    pub denomination: Denomination,
    pub at_ms: u64,
}

/// Every coin of a change result, in drawing order.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AnimationPlan {
    pub frames: Vec<Frame>,
    /// When the last coin's slot ends and input may be accepted again.
    pub duration_ms: u64,
}

impl AnimationPlan {
    /// Each denomination's coins share a `delay_ms` budget, so a row of
    /// many pennies draws as fast as a row holding a single dollar.
    pub fn new(change: &ChangeResult, delay_ms: u64) -> Self {
        let mut frames = Vec::with_capacity(change.coin_count() as usize);
        let mut at_ms = 0;

        for (denomination, count) in change.iter() {
            let step = if count == 0 { 0 } else { delay_ms / u64::from(count) };
            for _ in 0..count {
                frames.push(Frame { denomination, at_ms });
                at_ms += step;
            }
        }

        AnimationPlan {
            frames,
            duration_ms: at_ms,
        }
    }

    /// Frames belonging to one denomination's row.
    pub fn row(&self, denomination: Denomination) -> impl Iterator<Item = &Frame> + '_ {
        self.frames
            .iter()
            .filter(move |f| f.denomination == denomination)
    }
}

/// Count label shown next to a row; empty rows get none.
pub fn label(count: u32) -> Option<String> {
    (count > 0).then(|| format!("x{count}"))
}

/// Text stand-in for a coin image.
pub fn glyph(denomination: Denomination) -> &'static str {
    match denomination {
        Denomination::Dollar => "[$1]",
        Denomination::Quarter => "(25)",
        Denomination::Dime => "(10)",
        Denomination::Nickel => "(5)",
        Denomination::Penny => "(1)",
    }
}
