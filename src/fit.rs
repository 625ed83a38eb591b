//! Font size fitting.
//!
//! Walks the fit ladder `start_size, start_size - step, ...` downward and
//! accepts the first size whose ink box is strictly inside the limits. Sizes
//! at or below `min_size` are never measured; the floor is the fallback when
//! nothing fits.

use crate::backend::{TextBackend, TextBounds};
use crate::wrap::wrap;

#[derive(Debug, Clone, PartialEq)]
pub struct FitParams {
    pub max_width: f32,
    pub max_height: f32,
    pub start_size: u32,
    pub min_size: u32,
    pub step: u32,
    pub max_line_chars: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FitResult {
    pub size: u32,
    /// Wrapped text; identical for every size tried.
    pub text: String,
    /// False when the floor size was returned without fitting.
    pub fits: bool,
}

pub fn fit<B: TextBackend + ?Sized>(text: &str, backend: &B, params: &FitParams) -> FitResult {
    fit_with(text, |t, size| backend.measure(t, size), params)
}

pub fn fit_with<M>(text: &str, measure: M, params: &FitParams) -> FitResult
where
    M: Fn(&str, u32) -> TextBounds,
{
    let wrapped = wrap(text, params.max_line_chars);
    let step = params.step.max(1);
    let mut size = params.start_size;
    while size > params.min_size {
        let b = measure(&wrapped, size);
        if b.width() < params.max_width && b.height() < params.max_height {
            return FitResult { size, text: wrapped, fits: true };
        }
        size = size.saturating_sub(step);
    }
    FitResult { size: params.min_size, text: wrapped, fits: false }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn params() -> FitParams {
        FitParams {
            max_width: 824.0,
            max_height: 824.0,
            start_size: 576,
            min_size: 16,
            step: 16,
            max_line_chars: 22,
        }
    }

    fn linear(k: f32) -> impl Fn(&str, u32) -> TextBounds {
        move |t: &str, size: u32| {
            let lines: Vec<&str> = t.split('\n').collect();
            let longest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
            let size = size as f32;
            TextBounds::new(0.0, 0.0, longest as f32 * size * k, lines.len() as f32 * size)
        }
    }

    #[test]
    fn first_candidate_accepted_when_it_fits() {
        let r = fit_with("I", linear(0.5), &params());
        assert_eq!(r, FitResult { size: 576, text: "I".into(), fits: true });
    }

    #[test]
    fn returns_largest_fitting_ladder_size() {
        // width = 13 * size * 0.6 < 824  =>  size < 105.6 ; ladder hits 96
        let r = fit_with("Hello, world!", linear(0.6), &params());
        assert_eq!(r.size, 96);
        assert_eq!(r.text, "Hello, world!");
        assert!(r.fits);
        let above = linear(0.6)("Hello, world!", 112);
        assert!(above.width() >= 824.0);
    }

    #[test]
    fn strict_inequality_on_limits() {
        // exactly 824 wide at 412: rejected, next rung 396 accepted
        let p = FitParams { start_size: 412, step: 16, ..params() };
        let wide = |_: &str, s: u32| TextBounds::new(0.0, 0.0, s as f32 * 2.0, 1.0);
        let r = fit_with("xx", wide, &p);
        assert_eq!(r.size, 396);
    }

    #[test]
    fn floor_returned_when_nothing_fits() {
        let r = fit_with("anything", |_: &str, _| TextBounds::new(0.0, 0.0, 1e9, 1e9), &params());
        assert_eq!(r.size, 16);
        assert!(!r.fits);
        assert_eq!(r.text, "anything");
    }

    #[test]
    fn floor_is_never_measured() {
        let seen = RefCell::new(Vec::new());
        let p = FitParams { start_size: 64, min_size: 16, step: 16, ..params() };
        let r = fit_with("x", |_: &str, s| {
            seen.borrow_mut().push(s);
            TextBounds::new(0.0, 0.0, 1e9, 0.0)
        }, &p);
        assert_eq!(seen.into_inner(), vec![64, 48, 32]);
        assert_eq!(r.size, 16);
    }

    #[test]
    fn wraps_once_before_measuring() {
        let seen = RefCell::new(Vec::new());
        fit_with("The quick brown fox jumps over the lazy dog.", |t: &str, _| {
            seen.borrow_mut().push(t.to_string());
            TextBounds::new(0.0, 0.0, 1e9, 0.0)
        }, &params());
        let seen = seen.into_inner();
        assert!(seen.len() > 1);
        assert!(seen.iter().all(|t| t == "The quick brown fox\njumps over the lazy\ndog."));
    }

    #[test]
    fn size_always_within_ladder_bounds() {
        let ladders = [(576, 16, 16), (100, 7, 9), (20, 20, 5), (10, 3, 0), (5, 10, 1)];
        for (start, min, step) in ladders {
            let p = FitParams { start_size: start, min_size: min, step, ..params() };
            for k in [0.01f32, 0.6, 3.0, 1000.0] {
                let r = fit_with("Sphinx of black quartz, judge my vow.", linear(k), &p);
                assert!(r.size >= min, "{start}/{min}/{step} k={k} -> {}", r.size);
                assert!(r.size <= start.max(min), "{start}/{min}/{step} k={k} -> {}", r.size);
            }
        }
    }

    #[test]
    fn zero_step_still_terminates() {
        let p = FitParams { step: 0, start_size: 40, min_size: 16, ..params() };
        let r = fit_with("x", |_: &str, _| TextBounds::new(0.0, 0.0, 1e9, 0.0), &p);
        assert_eq!(r.size, 16);
    }
}
