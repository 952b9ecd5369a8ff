//! Splitting wide boxes into per-glyph windows for a fixed-size recognizer.

use swt_core::{BoundingBox, Result, SwtError};

/// Input size of a downstream recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowSize {
    pub height: u32,
    pub width: u32,
}

impl WindowSize {
    pub fn new(height: u32, width: u32) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(SwtError::config(format!(
                "window must be non-empty, got {}x{}",
                height, width
            )));
        }
        Ok(Self { height, width })
    }
}

/// How a box is cut: `pieces` windows of `piece_width` columns each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SplitPlan {
    pub piece_width: u32,
    pub pieces: u32,
}

/// Scale the box to the window height, count how many window widths fit,
/// then map the per-piece width back to image scale.
pub fn split_plan(bbox: &BoundingBox, window: WindowSize) -> Result<SplitPlan> {
    let w = bbox.width() as u64;
    let h = bbox.height() as u64;
    if w == 0 || h == 0 {
        return Err(SwtError::config(format!(
            "cannot split a degenerate box {}x{}",
            w, h
        )));
    }
    if window.height == 0 || window.width == 0 {
        return Err(SwtError::config("window must be non-empty"));
    }

    let wh = window.height as u64;
    let scaled_w = wh * w / h;
    let pieces = (scaled_w / window.width as u64).max(1);
    let scaled_piece = scaled_w / pieces;
    let piece_width = (h * scaled_piece / wh).max(1);

    Ok(SplitPlan {
        piece_width: piece_width.min(u32::MAX as u64) as u32,
        pieces: pieces.min(u32::MAX as u64) as u32,
    })
}

/// Consecutive windows left to right from `minx`. Neighbouring windows share
/// their boundary column; no window extends past `maxx`.
pub fn sub_windows(bbox: &BoundingBox, plan: SplitPlan) -> Vec<BoundingBox> {
    let step = plan.piece_width as u64;
    (0..plan.pieces as u64)
        .map(|i| {
            let start = (bbox.minx as u64 + i * step).min(bbox.maxx as u64) as u32;
            let end = (bbox.minx as u64 + (i + 1) * step).min(bbox.maxx as u64) as u32;
            BoundingBox::new(start, bbox.miny, end, bbox.maxy)
        })
        .collect()
}

/// [`split_plan`] followed by [`sub_windows`].
pub fn split_wide(bbox: &BoundingBox, window: WindowSize) -> Result<Vec<BoundingBox>> {
    let plan = split_plan(bbox, window)?;
    Ok(sub_windows(bbox, plan))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_plan_three_glyphs() {
        // 30x10 box scaled to 32 high is 96 wide: three 32px windows.
        let bbox = BoundingBox::new(10, 5, 40, 15);
        let plan = split_plan(&bbox, WindowSize::new(32, 32).unwrap()).unwrap();
        assert_eq!(plan, SplitPlan { piece_width: 10, pieces: 3 });

        let windows = sub_windows(&bbox, plan);
        assert_eq!(
            windows,
            vec![
                BoundingBox::new(10, 5, 20, 15),
                BoundingBox::new(20, 5, 30, 15),
                BoundingBox::new(30, 5, 40, 15),
            ]
        );
    }

    #[test]
    fn test_narrow_box_is_one_piece() {
        let bbox = BoundingBox::new(0, 0, 8, 20);
        let plan = split_plan(&bbox, WindowSize::new(32, 32).unwrap()).unwrap();
        // scaled_w = 12, piece_width = 20 * 12 / 32 = 7
        assert_eq!(plan, SplitPlan { piece_width: 7, pieces: 1 });
        assert_eq!(
            split_wide(&bbox, WindowSize::new(32, 32).unwrap()).unwrap(),
            vec![BoundingBox::new(0, 0, 7, 20)]
        );
    }

    #[test]
    fn test_integer_truncation() {
        // scaled_w = 20 * 45 / 12 = 75, pieces = 3, scaled_piece = 25,
        // piece_width = 12 * 25 / 20 = 15
        let bbox = BoundingBox::new(0, 0, 45, 12);
        let plan = split_plan(&bbox, WindowSize::new(20, 24).unwrap()).unwrap();
        assert_eq!(plan, SplitPlan { piece_width: 15, pieces: 3 });
    }

    #[test]
    fn test_windows_stay_inside_box() {
        let bbox = BoundingBox::new(3, 2, 50, 13);
        let windows = split_wide(&bbox, WindowSize::new(16, 10).unwrap()).unwrap();
        assert!(!windows.is_empty());
        for w in &windows {
            assert!(w.minx >= bbox.minx && w.maxx <= bbox.maxx);
            assert_eq!((w.miny, w.maxy), (bbox.miny, bbox.maxy));
        }
        assert_eq!(windows[0].minx, bbox.minx);
    }

    #[test]
    fn test_invalid_window() {
        assert!(matches!(WindowSize::new(0, 32), Err(SwtError::Config { .. })));
        let raw = WindowSize { height: 32, width: 0 };
        assert!(split_plan(&BoundingBox::new(0, 0, 30, 10), raw).is_err());
    }

    #[test]
    fn test_degenerate_box() {
        let window = WindowSize::new(32, 32).unwrap();
        assert!(split_plan(&BoundingBox::new(0, 0, 30, 0), window).is_err());
        assert!(split_plan(&BoundingBox::from_point(4, 4), window).is_err());
    }
}
