use std::time::{Duration, Instant};

/// Scale applied to the label text once it floats above the input.
pub const FLOATED_SCALE: f32 = 0.75;

pub const DEFAULT_LABEL_DURATION: Duration = Duration::from_millis(300);

/// The two canonical positions of the floating label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelLayout {
    /// Overlapping the input row, indistinguishable from a plain placeholder.
    Inline,
    /// Above the input baseline at [`FLOATED_SCALE`].
    Floated,
}

impl LabelLayout {
    pub fn frame(self) -> LabelFrame {
        match self {
            LabelLayout::Inline => LabelFrame::INLINE,
            LabelLayout::Floated => LabelFrame::FLOATED,
        }
    }
}

/// Observable (content, focus) combination of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldState {
    EmptyUnfocused,
    EmptyFocused,
    FilledUnfocused,
    FilledFocused,
}

impl FieldState {
    pub fn from_flags(is_empty: bool, is_focused: bool) -> Self {
        match (is_empty, is_focused) {
            (true, false) => FieldState::EmptyUnfocused,
            (true, true) => FieldState::EmptyFocused,
            (false, false) => FieldState::FilledUnfocused,
            (false, true) => FieldState::FilledFocused,
        }
    }

    pub fn is_empty(self) -> bool {
        matches!(self, FieldState::EmptyUnfocused | FieldState::EmptyFocused)
    }

    pub fn is_focused(self) -> bool {
        matches!(self, FieldState::EmptyFocused | FieldState::FilledFocused)
    }

    pub fn layout(self) -> LabelLayout {
        compute_target_layout(self.is_empty(), self.is_focused())
    }
}

/// The label only rests inline when there is nothing to cover and nobody is typing.
pub fn compute_target_layout(is_empty: bool, is_focused: bool) -> LabelLayout {
    if is_empty && !is_focused {
        LabelLayout::Inline
    } else {
        LabelLayout::Floated
    }
}

/// Interpolatable label geometry. `lift` runs from 0 (inline) to 1 (floated).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelFrame {
    pub lift: f32,
    pub scale: f32,
}

impl LabelFrame {
    pub const INLINE: LabelFrame = LabelFrame {
        lift: 0.0,
        scale: 1.0,
    };
    pub const FLOATED: LabelFrame = LabelFrame {
        lift: 1.0,
        scale: FLOATED_SCALE,
    };

    fn lerp(self, to: LabelFrame, t: f32) -> LabelFrame {
        LabelFrame {
            lift: self.lift + (to.lift - self.lift) * t,
            scale: self.scale + (to.scale - self.scale) * t,
        }
    }

    /// Nearest canonical layout, used by renderers that cannot draw fractional positions.
    pub fn nearest_layout(self) -> LabelLayout {
        if self.lift >= 0.5 {
            LabelLayout::Floated
        } else {
            LabelLayout::Inline
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    #[default]
    EaseInOut,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => t * t * (3.0 - 2.0 * t),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelMotion {
    pub duration: Duration,
    pub easing: Easing,
}

impl Default for LabelMotion {
    fn default() -> Self {
        Self {
            duration: DEFAULT_LABEL_DURATION,
            easing: Easing::default(),
        }
    }
}

impl LabelMotion {
    /// Snaps straight to the target layout.
    pub fn instant() -> Self {
        Self {
            duration: Duration::ZERO,
            easing: Easing::Linear,
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

#[derive(Debug, Clone, Copy)]
struct Transition {
    from: LabelFrame,
    started: Instant,
}

/// Drives the floating label from the current (empty, focused) pair.
///
/// The target is recomputed on every [`sync`](FloatingLabel::sync); an in-flight
/// transition is retargeted from wherever it currently is, so the newest event
/// always wins and no event is queued.
#[derive(Debug, Clone)]
pub struct FloatingLabel {
    motion: LabelMotion,
    state: FieldState,
    target: LabelLayout,
    transition: Option<Transition>,
}

impl Default for FloatingLabel {
    fn default() -> Self {
        Self::new(LabelMotion::default())
    }
}

impl FloatingLabel {
    pub fn new(motion: LabelMotion) -> Self {
        Self {
            motion,
            state: FieldState::EmptyUnfocused,
            target: LabelLayout::Inline,
            transition: None,
        }
    }

    pub fn motion(&self) -> LabelMotion {
        self.motion
    }

    pub fn set_motion(&mut self, motion: LabelMotion) {
        self.motion = motion;
    }

    pub fn state(&self) -> FieldState {
        self.state
    }

    /// Layout the label is at, or heading to.
    pub fn layout(&self) -> LabelLayout {
        self.target
    }

    /// Returns `true` when a new transition was started.
    pub fn sync(&mut self, is_empty: bool, is_focused: bool, now: Instant) -> bool {
        self.state = FieldState::from_flags(is_empty, is_focused);
        let target = self.state.layout();
        if target == self.target {
            return false;
        }
        let from = self.frame_at(now);
        self.target = target;
        if self.motion.duration.is_zero() {
            self.transition = None;
            return false;
        }
        self.transition = Some(Transition { from, started: now });
        true
    }

    pub fn frame_at(&self, now: Instant) -> LabelFrame {
        let to = self.target.frame();
        let Some(transition) = self.transition else {
            return to;
        };
        let progress = self.progress(&transition, now);
        if progress >= 1.0 {
            to
        } else {
            transition.from.lerp(to, self.motion.easing.apply(progress))
        }
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.transition
            .as_ref()
            .is_some_and(|transition| self.progress(transition, now) < 1.0)
    }

    /// Drops a finished transition so the label rests exactly on its layout.
    pub fn settle(&mut self, now: Instant) {
        if !self.is_animating(now) {
            self.transition = None;
        }
    }

    fn progress(&self, transition: &Transition, now: Instant) -> f32 {
        if self.motion.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(transition.started);
        (elapsed.as_secs_f32() / self.motion.duration.as_secs_f32()).min(1.0)
    }
}
