// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The slider state machine.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect};
use log::{debug, warn};
use smallvec::{SmallVec, smallvec};
use tactile_aria::{Label, Role, Slot};
use tactile_modality::{FocusVisible, Key, ModalitySource, PointerId};
use tactile_nav::TextDirection;
use tactile_value::{ControlledValue, IdGenerator, InteractionState};

use crate::config::{SliderConfig, SliderStep, Stop, Stops};
use crate::error::SliderError;
use crate::math::{self, Axis, STEP_EPSILON};

/// Track clicks are ignored for this long (milliseconds) after a drag ends.
pub const DRAG_CLICK_SUPPRESSION_MS: u64 = 100;

/// Steps (or stops) moved by `PageUp`/`PageDown`.
pub const PAGE_STEPS: isize = 10;

/// One of the two thumbs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Thumb {
    /// Lower thumb of a range slider. Pinned to `min` on single-thumb sliders.
    Infimum,
    /// Upper thumb, and the only thumb of a single-thumb slider.
    Supremum,
}

impl Thumb {
    /// Position in the value pair.
    pub fn index(self) -> usize {
        match self {
            Self::Infimum => 0,
            Self::Supremum => 1,
        }
    }

    /// Stable name of the thumb.
    pub fn name(self) -> &'static str {
        match self {
            Self::Infimum => "infimum",
            Self::Supremum => "supremum",
        }
    }
}

/// Render snapshot of a thumb.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ThumbInfo {
    /// Which thumb.
    pub thumb: Thumb,
    /// Current value.
    pub value: f64,
    /// Lowest value the thumb can take right now.
    pub min_value: f64,
    /// Highest value the thumb can take right now.
    pub max_value: f64,
    /// The thumb is being dragged.
    pub active: bool,
    /// Stacking order; the most recently grabbed thumb is on top.
    pub z_index: u8,
}

/// A stop as laid out on the track.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    /// `data-slot` of the stop label.
    pub slot: Slot,
    /// Value of the stop.
    pub value: f64,
    /// Position of the stop along the track, in percent.
    pub offset: f64,
    /// Distance to the next stop, in percent (zero for the last stop).
    pub length: f64,
    /// Label of the stop.
    pub label: Option<String>,
}

/// A value change to report to the consumer.
#[derive(Clone, Debug, PartialEq)]
pub struct SliderChange {
    /// The thumb that moved.
    pub thumb: Thumb,
    /// New values, one per exposed thumb.
    pub values: SmallVec<[f64; 2]>,
}

/// Outcome of a key press on a thumb.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KeyResponse {
    /// The key is a slider key; suppress its default action.
    pub prevent_default: bool,
    /// The resulting value change, if any.
    pub change: Option<SliderChange>,
}

/// Attributes of the slider root.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SliderAria<'a> {
    /// `data-slot`
    pub slot: Slot,
    /// `id`
    pub id: &'a str,
    /// `data-orientation`
    pub orientation: &'static str,
    /// `data-disabled`
    pub disabled: bool,
}

/// Attributes of the track.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TrackAria<'a> {
    /// `data-slot`
    pub slot: Slot,
    /// `id`
    pub id: &'a str,
}

/// Attributes and layout of the filled range between the thumbs.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RangeAria<'a> {
    /// `data-slot`
    pub slot: Slot,
    /// `id`
    pub id: &'a str,
    /// Where the range starts along the track, in percent.
    pub start: f64,
    /// Where the range ends along the track, in percent.
    pub end: f64,
}

/// The visible label element of a thumb.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ThumbLabel<'a> {
    /// `data-slot`
    pub slot: Slot,
    /// `id`, referenced by the thumb's `aria-labelledby`.
    pub id: &'a str,
    /// Text to render.
    pub text: &'a str,
}

/// Accessibility attributes of a thumb.
#[derive(Clone, Debug, PartialEq)]
pub struct ThumbAria<'a> {
    /// `data-slot`
    pub slot: Slot,
    /// `id`
    pub id: &'a str,
    /// Always [`Role::Slider`].
    pub role: Role,
    /// `aria-valuenow`.
    pub value_now: f64,
    /// `aria-valuemin`: the thumb's current lower bound.
    pub value_min: f64,
    /// `aria-valuemax`: the thumb's current upper bound.
    pub value_max: f64,
    /// `aria-valuetext`: the label of the stop at the current value, if any.
    pub value_text: Option<String>,
    /// `aria-orientation`.
    pub orientation: &'static str,
    /// `aria-disabled`.
    pub disabled: bool,
    /// `aria-label`.
    pub label: Option<&'a str>,
    /// `aria-labelledby`.
    pub labelled_by: Option<&'a str>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Drag {
    thumb: Thumb,
    pointer: Option<PointerId>,
}

const BOTH: &[Thumb] = &[Thumb::Infimum, Thumb::Supremum];
const UPPER: &[Thumb] = &[Thumb::Supremum];

/// Headless single- or dual-thumb slider.
///
/// Values live in a pair `[lower, upper]` with `lower <= upper` after every update. A
/// single-thumb slider keeps `lower` at `min` and exposes only [`Thumb::Supremum`].
///
/// All value changes go through one path that clamps the moving thumb to its current
/// bounds: `[min, upper]` for the lower thumb and `[lower, max]` for the upper one.
#[derive(Clone, Debug)]
pub struct Slider {
    min: f64,
    max: f64,
    step: SliderStep,
    stops_config: Option<Stops>,
    stops: Vec<Stop>,
    stop_values: Vec<f64>,
    segments: Vec<Segment>,
    multi_thumb: bool,
    id: String,
    track_id: String,
    range_id: String,
    thumb_ids: [String; 2],
    label_ids: [String; 2],
    labels: [Option<Label>; 2],
    axis: Axis,
    direction: TextDirection,
    disabled: bool,
    value: ControlledValue<[f64; 2]>,
    last_valid: [f64; 2],
    track: Rect,
    drag: Option<Drag>,
    raised: Thumb,
    last_thumb: Option<Thumb>,
    focus: [FocusVisible; 2],
    click_blocked_until: Option<u64>,
}

impl Slider {
    /// Validate `config` and create the slider.
    ///
    /// Without a host id in `config` the root id is `"slider-0"`; use
    /// [`with_ids`](Self::with_ids) when several sliders share a document.
    pub fn new(config: SliderConfig) -> Result<Self, SliderError> {
        Self::with_ids(config, &mut IdGenerator::new("slider"))
    }

    /// Validate `config` and create the slider, drawing its root id from `ids`.
    pub fn with_ids(config: SliderConfig, ids: &mut IdGenerator) -> Result<Self, SliderError> {
        let SliderConfig {
            min,
            max,
            step,
            stops,
            multi_thumb,
            value,
            default_value,
            labels,
            id,
            axis,
            direction,
            disabled,
        } = config;
        check_range(min, max)?;
        if let SliderStep::Value(s) = step {
            if !(s.is_finite() && s > 0.0) {
                return Err(SliderError::InvalidStep(s));
            }
        }
        let resolved = resolve_stops(min, max, stops.as_ref());
        if step == SliderStep::Snap && resolved.is_empty() {
            return Err(SliderError::SnapWithoutStops);
        }

        let expected = if multi_thumb { 2 } else { 1 };
        if !labels.is_empty() && labels.len() != expected {
            return Err(SliderError::LabelArity {
                expected,
                found: labels.len(),
            });
        }
        let mut labels = labels.into_iter();
        let labels = if multi_thumb {
            [labels.next(), labels.next()]
        } else {
            [None, labels.next()]
        };
        let controlled = value
            .as_deref()
            .map(|v| to_pair(v, min, max, multi_thumb))
            .transpose()?;
        let default = default_value
            .as_deref()
            .map(|v| to_pair(v, min, max, multi_thumb))
            .transpose()?;
        let hard_default = [min, if multi_thumb { max } else { min }];
        let value = ControlledValue::new(controlled, default, hard_default);
        let last_valid = *value.get();
        let id = ids.resolve(id.as_deref());
        let thumb_ids = [Thumb::Infimum, Thumb::Supremum]
            .map(|t| IdGenerator::part(&id, &format!("thumb-{}", t.name())));
        let track_id = IdGenerator::part(&id, "track");
        let range_id = IdGenerator::part(&id, "range");
        let label_ids = thumb_ids.each_ref().map(|t| IdGenerator::part(t, "label"));

        let mut slider = Self {
            min,
            max,
            step,
            stops_config: stops,
            stops: Vec::new(),
            stop_values: Vec::new(),
            segments: Vec::new(),
            multi_thumb,
            id,
            track_id,
            range_id,
            thumb_ids,
            label_ids,
            labels,
            axis,
            direction,
            disabled,
            value,
            last_valid,
            track: Rect::ZERO,
            drag: None,
            raised: Thumb::Supremum,
            last_thumb: None,
            focus: [FocusVisible::new(), FocusVisible::new()],
            click_blocked_until: None,
        };
        slider.apply_stops(resolved);
        Ok(slider)
    }

    /// Lower bound of the range.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound of the range.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Quantization mode.
    pub fn step(&self) -> SliderStep {
        self.step
    }

    /// Stops in ascending order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Stops laid out on the track.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Track axis.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Returns `true` for a range slider.
    pub fn is_multi_thumb(&self) -> bool {
        self.multi_thumb
    }

    /// The thumbs rendered by this slider.
    pub fn thumbs(&self) -> &'static [Thumb] {
        if self.multi_thumb { BOTH } else { UPPER }
    }

    /// Returns `true` if the slider ignores input.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Enable or disable the slider. Disabling ends any drag.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.drag = None;
        }
    }

    /// Change the range; stops given as a count are re-spread and values re-clamped.
    pub fn set_range(&mut self, min: f64, max: f64) -> Result<(), SliderError> {
        check_range(min, max)?;
        let resolved = resolve_stops(min, max, self.stops_config.as_ref());
        if self.step == SliderStep::Snap && resolved.is_empty() {
            return Err(SliderError::SnapWithoutStops);
        }
        self.min = min;
        self.max = max;
        self.apply_stops(resolved);
        let [lower, upper] = *self.value.get();
        let upper = upper.clamp(min, max);
        let lower = if self.multi_thumb {
            lower.clamp(min, upper)
        } else {
            min
        };
        self.value.set([lower, upper]);
        self.last_valid = [lower, upper];
        Ok(())
    }

    /// Replace the stops.
    pub fn set_stops(&mut self, stops: Option<Stops>) -> Result<(), SliderError> {
        let resolved = resolve_stops(self.min, self.max, stops.as_ref());
        if self.step == SliderStep::Snap && resolved.is_empty() {
            return Err(SliderError::SnapWithoutStops);
        }
        self.stops_config = stops;
        self.apply_stops(resolved);
        Ok(())
    }

    /// Current value of `thumb`.
    pub fn value(&self, thumb: Thumb) -> f64 {
        self.value.get()[thumb.index()]
    }

    /// Current values, one per exposed thumb.
    pub fn values(&self) -> SmallVec<[f64; 2]> {
        self.report(*self.value.get())
    }

    /// Bounds `thumb` can move within without crossing the other thumb.
    pub fn bounds(&self, thumb: Thumb) -> (f64, f64) {
        let [lower, upper] = *self.value.get();
        match thumb {
            Thumb::Infimum if self.multi_thumb => (self.min, upper),
            Thumb::Infimum => (self.min, self.min),
            Thumb::Supremum if self.multi_thumb => (lower, self.max),
            Thumb::Supremum => (self.min, self.max),
        }
    }

    /// Position of `thumb` along the track, in percent.
    pub fn percent(&self, thumb: Thumb) -> f64 {
        math::percent(self.value(thumb), self.min, self.max)
    }

    /// Render snapshot of `thumb`.
    pub fn thumb_info(&self, thumb: Thumb) -> ThumbInfo {
        let (min_value, max_value) = self.bounds(thumb);
        ThumbInfo {
            thumb,
            value: self.value(thumb),
            min_value,
            max_value,
            active: self.active_thumb() == Some(thumb),
            z_index: if self.raised == thumb { 2 } else { 1 },
        }
    }

    /// Layout of the track in the pointer coordinate space.
    pub fn set_track(&mut self, track: Rect) {
        self.track = track;
    }

    /// Layout of the track.
    pub fn track(&self) -> Rect {
        self.track
    }

    /// Unquantized value under `position`.
    pub fn value_at(&self, position: Point) -> f64 {
        math::value_at(
            position,
            self.track,
            self.axis,
            self.direction,
            self.min,
            self.max,
        )
    }

    /// Apply the step: floor to a step multiple, or snap to the nearest stop.
    pub fn quantize(&self, value: f64) -> f64 {
        match self.step {
            SliderStep::Value(step) => math::floor_to_step(value, step, self.min, self.max),
            SliderStep::Snap => math::nearest_stop(&self.stop_values, value)
                .map_or(value, |i| self.stop_values[i]),
        }
    }

    /// The thumb closest to `value`; ties go to the lower thumb.
    pub fn nearest_thumb(&self, value: f64) -> Thumb {
        if !self.multi_thumb {
            return Thumb::Supremum;
        }
        let [lower, upper] = *self.value.get();
        if (lower - value).abs() <= (upper - value).abs() {
            Thumb::Infimum
        } else {
            Thumb::Supremum
        }
    }

    /// The thumb being dragged.
    pub fn active_thumb(&self) -> Option<Thumb> {
        self.drag.map(|d| d.thumb)
    }

    /// Returns `true` while a thumb is being dragged.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// The thumb most recently dragged, clicked towards, or stepped.
    pub fn last_thumb(&self) -> Option<Thumb> {
        self.last_thumb
    }

    /// Pointer pressed on `thumb`: start dragging it.
    ///
    /// Returns `false` if the slider is disabled or doesn't render `thumb`.
    pub fn pointer_down_thumb(&mut self, thumb: Thumb, pointer: Option<PointerId>) -> bool {
        if self.disabled || !self.thumbs().contains(&thumb) {
            return false;
        }
        self.drag = Some(Drag { thumb, pointer });
        self.raised = thumb;
        self.last_thumb = Some(thumb);
        true
    }

    /// Pointer moved anywhere.
    ///
    /// Only the pointer that started a drag on this slider moves a thumb, so hosts can
    /// forward document-wide moves to every slider.
    pub fn pointer_move(&mut self, pointer: Option<PointerId>, position: Point) -> Option<SliderChange> {
        let drag = self.drag?;
        if drag.pointer != pointer {
            return None;
        }
        let value = self.quantize(self.value_at(position));
        self.emit(drag.thumb, value)
    }

    /// Pointer released anywhere. Returns `true` if it ended a drag on this slider.
    ///
    /// Track clicks in the next [`DRAG_CLICK_SUPPRESSION_MS`] are ignored so the click
    /// that ends the drag doesn't also move a thumb.
    pub fn pointer_up(&mut self, pointer: Option<PointerId>, now: u64) -> bool {
        match self.drag {
            Some(drag) if drag.pointer == pointer => {
                self.drag = None;
                self.click_blocked_until = Some(now.saturating_add(DRAG_CLICK_SUPPRESSION_MS));
                true
            }
            _ => false,
        }
    }

    /// Abandon the drag without suppressing clicks.
    pub fn cancel_drag(&mut self) {
        self.drag = None;
    }

    /// Click on the track: move the nearest thumb to the clicked value.
    pub fn track_click(&mut self, position: Point, now: u64) -> Option<SliderChange> {
        if !self.accepts_click(now) {
            return None;
        }
        let value = self.quantize(self.value_at(position));
        let thumb = self.nearest_thumb(value);
        self.emit(thumb, value)
    }

    /// Click on the label of the stop at `index`: move the nearest thumb onto it.
    pub fn segment_click(&mut self, index: usize, now: u64) -> Option<SliderChange> {
        let value = self.stop_values.get(index).copied()?;
        if !self.accepts_click(now) {
            return None;
        }
        let thumb = self.nearest_thumb(value);
        self.emit(thumb, value)
    }

    /// Key pressed while `thumb` has focus.
    pub fn key_down(&mut self, thumb: Thumb, key: Key, source: &dyn ModalitySource) -> KeyResponse {
        if self.disabled || !self.thumbs().contains(&thumb) {
            return KeyResponse::default();
        }
        self.focus[thumb.index()].on_key_down(source);
        let (lower, upper) = self.bounds(thumb);
        let target = match key {
            Key::Home => lower,
            Key::End => upper,
            _ => {
                let Some(delta) = self.key_delta(key) else {
                    return KeyResponse::default();
                };
                self.stepped(self.value(thumb), delta)
            }
        };
        self.last_thumb = Some(thumb);
        KeyResponse {
            prevent_default: true,
            change: self.emit(thumb, target),
        }
    }

    /// `thumb` received focus.
    pub fn focus_thumb(&mut self, thumb: Thumb, source: &dyn ModalitySource) -> bool {
        self.focus[thumb.index()].on_focus(source)
    }

    /// `thumb` lost focus.
    pub fn blur_thumb(&mut self, thumb: Thumb) {
        self.focus[thumb.index()].on_blur();
    }

    /// Returns `true` if `thumb` has focus that should be indicated.
    pub fn is_focus_visible(&self, thumb: Thumb) -> bool {
        self.focus[thumb.index()].is_focus_visible()
    }

    /// Interaction state of `thumb`.
    pub fn thumb_state(&self, thumb: Thumb) -> InteractionState {
        let focus = &self.focus[thumb.index()];
        let mut s = InteractionState::empty();
        s.set(InteractionState::FOCUSED, focus.is_focused());
        s.set(InteractionState::FOCUS_VISIBLE, focus.is_focus_visible());
        s.set(InteractionState::PRESSED, self.active_thumb() == Some(thumb));
        s.set(InteractionState::DISABLED, self.disabled);
        s
    }

    /// Reconcile with the values the host supplied for this render.
    ///
    /// A controlled pair that is out of order or has the wrong length is replaced by the
    /// last valid pair.
    pub fn sync(&mut self, value: Option<&[f64]>) {
        let pair = value.map(|v| {
            to_pair(v, self.min, self.max, self.multi_thumb).unwrap_or(self.last_valid)
        });
        self.value.sync(pair);
        if self.value.is_controlled() && pair.is_some() {
            self.last_valid = *self.value.get();
        }
    }

    /// The slider's element is gone: drop the drag, timers, and focus.
    pub fn unmount(&mut self) {
        self.drag = None;
        self.click_blocked_until = None;
        for focus in &mut self.focus {
            focus.on_blur();
        }
    }

    /// Id of the root element.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Id of `thumb`'s element.
    pub fn thumb_id(&self, thumb: Thumb) -> &str {
        &self.thumb_ids[thumb.index()]
    }

    /// Accessible name of `thumb`.
    pub fn label(&self, thumb: Thumb) -> Option<&Label> {
        self.labels[thumb.index()].as_ref()
    }

    /// The label element to render next to `thumb`, if its name is visible text.
    pub fn thumb_label(&self, thumb: Thumb) -> Option<ThumbLabel<'_>> {
        let text = self.label(thumb)?.visible_text()?;
        Some(ThumbLabel {
            slot: Slot::Label,
            id: &self.label_ids[thumb.index()],
            text,
        })
    }

    /// Attributes of the root.
    pub fn root_aria(&self) -> SliderAria<'_> {
        SliderAria {
            slot: Slot::Slider,
            id: &self.id,
            orientation: self.orientation(),
            disabled: self.disabled,
        }
    }

    /// Attributes of the track.
    pub fn track_aria(&self) -> TrackAria<'_> {
        TrackAria {
            slot: Slot::SliderTrack,
            id: &self.track_id,
        }
    }

    /// Attributes and extent of the filled range.
    ///
    /// A single-thumb slider fills from `min` to its thumb.
    pub fn range_aria(&self) -> RangeAria<'_> {
        RangeAria {
            slot: Slot::SliderRange,
            id: &self.range_id,
            start: self.percent(Thumb::Infimum),
            end: self.percent(Thumb::Supremum),
        }
    }

    /// Accessibility attributes of `thumb`.
    pub fn aria(&self, thumb: Thumb) -> ThumbAria<'_> {
        let value = self.value(thumb);
        let (value_min, value_max) = self.bounds(thumb);
        let label = self.label(thumb);
        let label_id = self.label_ids[thumb.index()].as_str();
        ThumbAria {
            slot: Slot::SliderThumb,
            id: self.thumb_id(thumb),
            role: Role::Slider,
            value_now: value,
            value_min,
            value_max,
            value_text: self
                .stops
                .iter()
                .find(|s| s.value == value)
                .and_then(|s| s.label.clone()),
            orientation: self.orientation(),
            disabled: self.disabled,
            label: label.and_then(Label::aria_label),
            labelled_by: label.and_then(|l| l.aria_labelledby(Some(label_id))),
        }
    }

    fn orientation(&self) -> &'static str {
        match self.axis {
            Axis::Horizontal => "horizontal",
            Axis::Vertical => "vertical",
        }
    }

    /// The single change path: clamp to the thumb's bounds and record the new pair.
    fn emit(&mut self, thumb: Thumb, value: f64) -> Option<SliderChange> {
        if self.disabled || !self.thumbs().contains(&thumb) {
            return None;
        }
        let (lower, upper) = self.bounds(thumb);
        let mut next = *self.value.get();
        next[thumb.index()] = value.clamp(lower, upper);
        self.last_thumb = Some(thumb);
        let pair = self.value.set(next)?;
        self.last_valid = pair;
        Some(SliderChange {
            thumb,
            values: self.report(pair),
        })
    }

    fn accepts_click(&mut self, now: u64) -> bool {
        if self.disabled || self.drag.is_some() {
            return false;
        }
        match self.click_blocked_until {
            Some(until) if now < until => {
                debug!("track click suppressed for another {}ms", until.saturating_sub(now));
                false
            }
            _ => {
                self.click_blocked_until = None;
                true
            }
        }
    }

    fn key_delta(&self, key: Key) -> Option<isize> {
        let flip = self.axis == Axis::Horizontal && self.direction == TextDirection::Rtl;
        let delta = match key {
            Key::ArrowUp => 1,
            Key::ArrowDown => -1,
            Key::ArrowRight if flip => -1,
            Key::ArrowRight => 1,
            Key::ArrowLeft if flip => 1,
            Key::ArrowLeft => -1,
            Key::PageUp => PAGE_STEPS,
            Key::PageDown => -PAGE_STEPS,
            _ => return None,
        };
        Some(delta)
    }

    /// Move `delta` steps from `current`, or `delta` stops under snap stepping.
    ///
    /// A value between grid lines (or stops) counts the nearest line in the direction
    /// of travel as the first step.
    fn stepped(&self, current: f64, delta: isize) -> f64 {
        match self.step {
            SliderStep::Value(step) => {
                let base = math::floor_to_step(current, step, self.min, self.max);
                let off_grid = current - base > STEP_EPSILON * step;
                let delta = if delta < 0 && off_grid { delta + 1 } else { delta };
                base + delta as f64 * step
            }
            SliderStep::Snap => {
                let stops = &self.stop_values;
                let Some(nearest) = math::nearest_stop(stops, current) else {
                    return current;
                };
                let last = stops.len() - 1;
                let n = delta.unsigned_abs();
                let target = if (stops[nearest] - current).abs() <= STEP_EPSILON {
                    Some(nearest.saturating_add_signed(delta).min(last))
                } else {
                    // Stops below `current`; also the index of the first stop above it.
                    let below = stops.partition_point(|&s| s < current);
                    if delta > 0 {
                        (below <= last).then(|| (below + n - 1).min(last))
                    } else {
                        (below > 0).then(|| below.saturating_sub(n))
                    }
                };
                target.map_or(current, |i| stops[i])
            }
        }
    }

    fn apply_stops(&mut self, stops: Vec<Stop>) {
        self.stop_values = stops.iter().map(|s| s.value).collect();
        self.segments = stops
            .iter()
            .enumerate()
            .map(|(i, stop)| {
                let offset = math::percent(stop.value, self.min, self.max);
                let length = self
                    .stop_values
                    .get(i + 1)
                    .map_or(0.0, |&next| math::percent(next, self.min, self.max) - offset);
                Segment {
                    slot: Slot::SliderSegment,
                    value: stop.value,
                    offset,
                    length,
                    label: stop.label.clone(),
                }
            })
            .collect();
        self.stops = stops;
    }

    fn report(&self, pair: [f64; 2]) -> SmallVec<[f64; 2]> {
        if self.multi_thumb {
            smallvec![pair[0], pair[1]]
        } else {
            smallvec![pair[1]]
        }
    }
}

fn check_range(min: f64, max: f64) -> Result<(), SliderError> {
    if !(min.is_finite() && max.is_finite()) {
        return Err(SliderError::NonFiniteBounds { min, max });
    }
    if max < min {
        return Err(SliderError::InvertedBounds { min, max });
    }
    Ok(())
}

/// Turn host values into a clamped pair.
fn to_pair(values: &[f64], min: f64, max: f64, multi_thumb: bool) -> Result<[f64; 2], SliderError> {
    let expected = if multi_thumb { 2 } else { 1 };
    if values.len() != expected {
        return Err(SliderError::ValueArity {
            expected,
            found: values.len(),
        });
    }
    let clamp = |v: f64| if v.is_nan() { min } else { v.clamp(min, max) };
    if !multi_thumb {
        return Ok([min, clamp(values[0])]);
    }
    let (lower, upper) = (clamp(values[0]), clamp(values[1]));
    if lower > upper {
        return Err(SliderError::InvalidValuePair { lower, upper });
    }
    Ok([lower, upper])
}

/// Materialize stops: spread counts, drop values outside the range, sort, and dedup.
fn resolve_stops(min: f64, max: f64, stops: Option<&Stops>) -> Vec<Stop> {
    let mut resolved: Vec<Stop> = match stops {
        None | Some(Stops::Count(0)) => Vec::new(),
        Some(Stops::Count(1)) => alloc::vec![Stop::new(min)],
        Some(Stops::Count(n)) => {
            let intervals = (n - 1) as f64;
            (0..*n)
                .map(|i| Stop::new(min + (max - min) * i as f64 / intervals))
                .collect()
        }
        Some(Stops::List(list)) => list
            .iter()
            .filter(|s| {
                let ok = s.value.is_finite() && s.value >= min && s.value <= max;
                if !ok {
                    warn!("slider stop {} is outside [{min}, {max}] and was dropped", s.value);
                }
                ok
            })
            .cloned()
            .collect(),
    };
    resolved.sort_by(|a, b| a.value.total_cmp(&b.value));
    resolved.dedup_by(|a, b| a.value == b.value);
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use core::num::NonZeroU64;
    use tactile_aria::LabelError;
    use tactile_modality::{LocalModality, Modifiers};

    const TRACK: Rect = Rect::new(0.0, 0.0, 100.0, 10.0);

    fn at(x: f64) -> Point {
        Point::new(x, 5.0)
    }

    fn range(lower: f64, upper: f64) -> Slider {
        let mut s = Slider::new(
            SliderConfig::new(0.0, 100.0)
                .with_multi_thumb(true)
                .with_default_value(vec![lower, upper]),
        )
        .unwrap();
        s.set_track(TRACK);
        s
    }

    fn snapping() -> Slider {
        let stops = [0.0, 15.0, 50.0, 85.0, 100.0].map(Stop::new).to_vec();
        let mut s = Slider::new(
            SliderConfig::new(0.0, 100.0)
                .with_step(SliderStep::Snap)
                .with_stops(Stops::List(stops)),
        )
        .unwrap();
        s.set_track(TRACK);
        s
    }

    #[test]
    fn lower_thumb_cannot_pass_upper() {
        let mut s = range(10.0, 50.0);
        assert!(s.pointer_down_thumb(Thumb::Infimum, None));
        let change = s.pointer_move(None, at(80.0)).unwrap();
        assert_eq!(change.values.as_slice(), &[50.0, 50.0]);
        assert_eq!(s.value(Thumb::Infimum), 50.0);
        assert!(s.pointer_up(None, 0));
        assert!(s.value(Thumb::Infimum) <= s.value(Thumb::Supremum));
    }

    #[test]
    fn ordering_holds_across_mixed_input() {
        let m = LocalModality::new();
        let mut s = range(40.0, 60.0);
        let mut now = 0;
        for x in [90.0, 5.0, 55.0, 100.0, 0.0, 61.0] {
            now += 1000;
            s.track_click(at(x), now);
            s.key_down(Thumb::Infimum, Key::PageUp, &m);
            s.key_down(Thumb::Supremum, Key::ArrowLeft, &m);
            s.key_down(Thumb::Supremum, Key::Home, &m);
            assert!(s.value(Thumb::Infimum) <= s.value(Thumb::Supremum));
        }
    }

    #[test]
    fn snap_segment_click_then_arrow_moves_to_next_stop() {
        let m = LocalModality::new();
        let mut s = snapping();
        let change = s.segment_click(2, 0).unwrap();
        assert_eq!(change.values.as_slice(), &[50.0]);
        let step = s.key_down(Thumb::Supremum, Key::ArrowRight, &m);
        assert!(step.prevent_default);
        assert_eq!(step.change.unwrap().values.as_slice(), &[85.0]);
        s.key_down(Thumb::Supremum, Key::End, &m);
        assert_eq!(s.value(Thumb::Supremum), 100.0);
        let past_end = s.key_down(Thumb::Supremum, Key::PageUp, &m);
        assert!(past_end.prevent_default);
        assert_eq!(past_end.change, None);
    }

    #[test]
    fn snap_pointer_lands_on_nearest_stop() {
        let mut s = snapping();
        let change = s.track_click(at(62.0), 0).unwrap();
        assert_eq!(change.values.as_slice(), &[50.0]);
        assert_eq!(s.track_click(at(70.0), 1).unwrap().values.as_slice(), &[85.0]);
    }

    #[test]
    fn numeric_step_floors_pointer_values() {
        let mut s = Slider::new(SliderConfig::new(0.0, 100.0).with_step(SliderStep::Value(10.0)))
            .unwrap();
        s.set_track(TRACK);
        assert_eq!(s.track_click(at(47.0), 0).unwrap().values.as_slice(), &[40.0]);
    }

    #[test]
    fn sliders_do_not_interfere() {
        let mut a = range(10.0, 90.0);
        let mut b = range(10.0, 90.0);
        let pointer = NonZeroU64::new(7);
        assert!(a.pointer_down_thumb(Thumb::Supremum, pointer));
        assert_eq!(b.pointer_move(pointer, at(30.0)), None);
        assert!(a.pointer_move(pointer, at(30.0)).is_some());
        assert!(!b.pointer_up(pointer, 0));
        assert!(a.pointer_up(pointer, 0));
        assert_eq!(b.values().as_slice(), &[10.0, 90.0]);
    }

    #[test]
    fn click_right_after_drag_is_ignored() {
        let mut s = range(10.0, 90.0);
        s.pointer_down_thumb(Thumb::Supremum, None);
        s.pointer_move(None, at(70.0));
        s.pointer_up(None, 1000);
        assert_eq!(s.track_click(at(20.0), 1050), None);
        assert!(s.track_click(at(20.0), 1100).is_some());
    }

    #[test]
    fn nearest_thumb_ties_favor_lower() {
        let s = range(40.0, 60.0);
        assert_eq!(s.nearest_thumb(50.0), Thumb::Infimum);
        assert_eq!(s.nearest_thumb(51.0), Thumb::Supremum);
    }

    #[test]
    fn drag_raises_thumb() {
        let mut s = range(40.0, 60.0);
        assert_eq!(s.thumb_info(Thumb::Supremum).z_index, 2);
        s.pointer_down_thumb(Thumb::Infimum, None);
        let info = s.thumb_info(Thumb::Infimum);
        assert!(info.active);
        assert_eq!(info.z_index, 2);
        assert_eq!((info.min_value, info.max_value), (0.0, 60.0));
        assert_eq!(s.thumb_info(Thumb::Supremum).z_index, 1);
        s.pointer_up(None, 0);
        assert!(!s.thumb_info(Thumb::Infimum).active);
        assert_eq!(s.thumb_info(Thumb::Infimum).z_index, 2);
    }

    #[test]
    fn rtl_and_vertical_keys() {
        let m = LocalModality::new();
        let mut rtl =
            Slider::new(SliderConfig::new(0.0, 10.0).with_direction(TextDirection::Rtl)).unwrap();
        rtl.key_down(Thumb::Supremum, Key::ArrowLeft, &m);
        assert_eq!(rtl.value(Thumb::Supremum), 1.0);

        let mut vertical = Slider::new(
            SliderConfig::new(0.0, 10.0)
                .with_axis(Axis::Vertical)
                .with_default_value(vec![5.0]),
        )
        .unwrap();
        vertical.key_down(Thumb::Supremum, Key::ArrowDown, &m);
        assert_eq!(vertical.value(Thumb::Supremum), 4.0);
        assert!(!vertical.key_down(Thumb::Supremum, Key::Char('a'), &m).prevent_default);
    }

    #[test]
    fn single_thumb_hides_lower() {
        let m = LocalModality::new();
        let mut s = Slider::new(SliderConfig::new(0.0, 10.0)).unwrap();
        assert_eq!(s.thumbs(), &[Thumb::Supremum]);
        assert!(!s.pointer_down_thumb(Thumb::Infimum, None));
        assert_eq!(s.key_down(Thumb::Infimum, Key::ArrowUp, &m), KeyResponse::default());
        assert_eq!(s.values().as_slice(), &[0.0]);
    }

    #[test]
    fn controlled_invalid_pair_falls_back() {
        let mut s = Slider::new(
            SliderConfig::new(0.0, 100.0)
                .with_multi_thumb(true)
                .with_value(vec![20.0, 30.0]),
        )
        .unwrap();
        s.sync(Some(&[25.0, 35.0]));
        s.sync(Some(&[80.0, 10.0]));
        assert_eq!(s.values().as_slice(), &[25.0, 35.0]);
        s.sync(Some(&[1.0]));
        assert_eq!(s.values().as_slice(), &[25.0, 35.0]);
    }

    #[test]
    fn controlled_echo_is_replaced_by_host() {
        let m = LocalModality::new();
        let mut s =
            Slider::new(SliderConfig::new(0.0, 10.0).with_value(vec![3.0])).unwrap();
        let change = s.key_down(Thumb::Supremum, Key::ArrowUp, &m).change.unwrap();
        assert_eq!(change.values.as_slice(), &[4.0]);
        s.sync(Some(&[3.0]));
        assert_eq!(s.value(Thumb::Supremum), 3.0);
    }

    #[test]
    fn construction_errors() {
        assert_eq!(
            Slider::new(SliderConfig::new(10.0, 0.0)).unwrap_err(),
            SliderError::InvertedBounds { min: 10.0, max: 0.0 }
        );
        assert!(matches!(
            Slider::new(SliderConfig::new(f64::NAN, 0.0)),
            Err(SliderError::NonFiniteBounds { .. })
        ));
        assert_eq!(
            Slider::new(SliderConfig::new(0.0, 1.0).with_step(SliderStep::Snap)).unwrap_err(),
            SliderError::SnapWithoutStops
        );
        assert_eq!(
            Slider::new(SliderConfig::new(0.0, 1.0).with_step(SliderStep::Value(0.0)))
                .unwrap_err(),
            SliderError::InvalidStep(0.0)
        );
        assert_eq!(
            Slider::new(SliderConfig::new(0.0, 1.0).with_multi_thumb(true).with_value(vec![0.5]))
                .unwrap_err(),
            SliderError::ValueArity {
                expected: 2,
                found: 1
            }
        );
        assert_eq!(
            Slider::new(SliderConfig::new(0.0, 1.0).with_labels(vec!["a".into(), "b".into()]))
                .unwrap_err(),
            SliderError::LabelArity {
                expected: 1,
                found: 2
            }
        );
        assert_eq!(
            Slider::new(
                SliderConfig::new(0.0, 10.0)
                    .with_multi_thumb(true)
                    .with_default_value(vec![8.0, 2.0])
            )
            .unwrap_err(),
            SliderError::InvalidValuePair {
                lower: 8.0,
                upper: 2.0
            }
        );
    }

    #[test]
    fn stops_are_sorted_and_laid_out() {
        let s = Slider::new(SliderConfig::new(0.0, 100.0).with_stops(Stops::List(vec![
            Stop::labelled(100.0, "max"),
            Stop::new(25.0),
            Stop::new(250.0),
            Stop::labelled(0.0, "min"),
        ])))
        .unwrap();
        let values: Vec<f64> = s.stops().iter().map(|s| s.value).collect();
        assert_eq!(values, vec![0.0, 25.0, 100.0]);
        let seg = &s.segments()[1];
        assert_eq!((seg.offset, seg.length), (25.0, 75.0));
        assert_eq!(s.aria(Thumb::Supremum).value_text.as_deref(), Some("min"));
    }

    #[test]
    fn counted_stops_follow_range_changes() {
        let mut s = Slider::new(SliderConfig::new(0.0, 100.0).with_stops(Stops::Count(5))).unwrap();
        let values: Vec<f64> = s.stops().iter().map(|s| s.value).collect();
        assert_eq!(values, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
        s.set_range(0.0, 200.0).unwrap();
        assert_eq!(s.stops()[1].value, 50.0);
    }

    #[test]
    fn disabled_slider_ignores_input() {
        let m = LocalModality::new();
        let mut s = range(10.0, 90.0);
        s.set_disabled(true);
        assert!(!s.pointer_down_thumb(Thumb::Supremum, None));
        assert_eq!(s.track_click(at(50.0), 0), None);
        assert!(!s.key_down(Thumb::Supremum, Key::ArrowUp, &m).prevent_default);
        assert!(s.thumb_state(Thumb::Supremum).contains(InteractionState::DISABLED));
        assert!(s.aria(Thumb::Supremum).disabled);
    }

    #[test]
    fn huge_ranges_map_without_saturating() {
        let mut s = Slider::new(SliderConfig::new(0.0, 1e20)).unwrap();
        s.set_track(TRACK);
        assert_eq!(s.track_click(at(50.0), 0).unwrap().values.as_slice(), &[5e19]);
    }

    #[test]
    fn snap_keys_from_between_stops_reach_adjacent_stop() {
        let m = LocalModality::new();
        let stops = [0.0, 15.0, 50.0, 85.0, 100.0].map(Stop::new).to_vec();
        let config = SliderConfig::new(0.0, 100.0)
            .with_step(SliderStep::Snap)
            .with_stops(Stops::List(stops))
            .with_default_value(vec![51.0]);
        let mut s = Slider::new(config.clone()).unwrap();
        s.key_down(Thumb::Supremum, Key::ArrowLeft, &m);
        assert_eq!(s.value(Thumb::Supremum), 50.0);

        let mut s = Slider::new(config.clone()).unwrap();
        s.key_down(Thumb::Supremum, Key::ArrowRight, &m);
        assert_eq!(s.value(Thumb::Supremum), 85.0);

        let mut s = Slider::new(config).unwrap();
        s.key_down(Thumb::Supremum, Key::PageDown, &m);
        assert_eq!(s.value(Thumb::Supremum), 0.0);
    }

    #[test]
    fn numeric_keys_land_on_the_step_grid() {
        let m = LocalModality::new();
        let config = SliderConfig::new(0.0, 10.0).with_default_value(vec![3.5]);
        let mut up = Slider::new(config.clone()).unwrap();
        up.key_down(Thumb::Supremum, Key::ArrowRight, &m);
        assert_eq!(up.value(Thumb::Supremum), 4.0);

        let mut down = Slider::new(config).unwrap();
        down.key_down(Thumb::Supremum, Key::ArrowLeft, &m);
        assert_eq!(down.value(Thumb::Supremum), 3.0);
        down.key_down(Thumb::Supremum, Key::ArrowLeft, &m);
        assert_eq!(down.value(Thumb::Supremum), 2.0);
    }

    #[test]
    fn click_stamped_before_drag_end_is_ignored() {
        log::set_max_level(log::LevelFilter::Debug);
        let mut s = range(10.0, 90.0);
        s.pointer_down_thumb(Thumb::Supremum, None);
        s.pointer_up(None, 1000);
        assert_eq!(s.track_click(at(20.0), 500), None);
    }

    #[test]
    fn parts_are_marked_and_linked() {
        let mut ids = IdGenerator::new("volume");
        let s = Slider::with_ids(
            SliderConfig::new(0.0, 100.0)
                .with_multi_thumb(true)
                .with_labels(vec![
                    Label::from("Minimum"),
                    Label::ScreenReader("Maximum".into()),
                ]),
            &mut ids,
        )
        .unwrap();
        assert_eq!(s.root_aria().id, "volume-0");
        assert_eq!(s.root_aria().slot, Slot::Slider);
        assert_eq!(s.track_aria().id, "volume-0-track");
        assert_eq!(s.range_aria().slot, Slot::SliderRange);
        assert_eq!((s.range_aria().start, s.range_aria().end), (0.0, 100.0));

        let lower = s.aria(Thumb::Infimum);
        assert_eq!(lower.id, "volume-0-thumb-infimum");
        assert_eq!((lower.slot, lower.role), (Slot::SliderThumb, Role::Slider));
        assert_eq!(lower.labelled_by, Some("volume-0-thumb-infimum-label"));
        assert_eq!(lower.label, None);
        let label = s.thumb_label(Thumb::Infimum).unwrap();
        assert_eq!((label.id, label.text), ("volume-0-thumb-infimum-label", "Minimum"));

        let upper = s.aria(Thumb::Supremum);
        assert_eq!(upper.label, Some("Maximum"));
        assert_eq!(upper.labelled_by, None);
        assert_eq!(s.thumb_label(Thumb::Supremum), None);
        assert!(s.segments().iter().all(|seg| seg.slot == Slot::SliderSegment));
    }

    #[test]
    fn host_id_and_label_shapes() {
        let s = Slider::new(
            SliderConfig::new(0.0, 1.0)
                .with_id("gain")
                .with_label_parts(None, None, Some("gain-heading".into()))
                .unwrap(),
        )
        .unwrap();
        assert_eq!(s.thumb_id(Thumb::Supremum), "gain-thumb-supremum");
        assert_eq!(s.aria(Thumb::Supremum).labelled_by, Some("gain-heading"));
        assert_eq!(
            SliderConfig::new(0.0, 1.0)
                .with_label_parts(Some("a".into()), Some("b".into()), None)
                .unwrap_err(),
            SliderError::Label(LabelError::Ambiguous(2))
        );
    }

    #[test]
    fn keyboard_focus_is_visible_per_thumb() {
        let m = LocalModality::new();
        let mut s = range(10.0, 90.0);
        m.key_down(Key::Tab, Modifiers::empty());
        assert!(s.focus_thumb(Thumb::Infimum, &m));
        assert!(s.is_focus_visible(Thumb::Infimum));
        assert!(!s.is_focus_visible(Thumb::Supremum));
        s.unmount();
        assert!(!s.is_focus_visible(Thumb::Infimum));
    }
}
