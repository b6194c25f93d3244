#![forbid(unsafe_code)]

//! Recording, tick-driven animator double.
//!
//! Immediate property writes land in a per-view table. Animations are
//! queued and progress only when the test calls [`RecordingAnimator::advance`]
//! (or completes one explicitly); finished animations come back as the
//! completion events the controller expects, in start order.

use std::time::Duration;

use ahash::AHashMap;
use swipelist_core::{AnimationToken, Animator, SettleTarget, SwipeEvent, ViewId};

/// Presentation state of one view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewProps {
    pub translation_x: f32,
    pub opacity: f32,
    pub height: f32,
}

/// An animation request as the controller issued it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Started {
    Settle {
        view: ViewId,
        target: SettleTarget,
        duration: Duration,
        token: AnimationToken,
    },
    Height {
        view: ViewId,
        from: f32,
        to: f32,
        duration: Duration,
        token: AnimationToken,
    },
}

impl Started {
    #[must_use]
    pub fn token(&self) -> AnimationToken {
        match self {
            Self::Settle { token, .. } | Self::Height { token, .. } => *token,
        }
    }

    #[must_use]
    pub fn view(&self) -> ViewId {
        match self {
            Self::Settle { view, .. } | Self::Height { view, .. } => *view,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Running {
    request: Started,
    from: ViewProps,
    elapsed: Duration,
}

/// Quadratic ease-out, matching the platform's default settle curve.
#[must_use]
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Deterministic [`Animator`].
#[derive(Debug, Clone)]
pub struct RecordingAnimator {
    props: AHashMap<ViewId, ViewProps>,
    default_height: f32,
    /// Every animation ever started, in order.
    pub started: Vec<Started>,
    running: Vec<Running>,
}

impl RecordingAnimator {
    #[must_use]
    pub fn new(default_height: f32) -> Self {
        Self {
            props: AHashMap::new(),
            default_height,
            started: Vec::new(),
            running: Vec::new(),
        }
    }

    /// Current presentation of a view.
    #[must_use]
    pub fn props(&self, view: ViewId) -> ViewProps {
        self.props.get(&view).copied().unwrap_or(ViewProps {
            translation_x: 0.0,
            opacity: 1.0,
            height: self.default_height,
        })
    }

    fn props_mut(&mut self, view: ViewId) -> &mut ViewProps {
        let default = self.props(view);
        self.props.entry(view).or_insert(default)
    }

    /// Animations still running.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.running.len()
    }

    /// Tokens of running animations, in start order.
    #[must_use]
    pub fn running_tokens(&self) -> Vec<AnimationToken> {
        self.running.iter().map(|r| r.request.token()).collect()
    }

    /// Requests of running animations, in start order.
    #[must_use]
    pub fn running(&self) -> Vec<Started> {
        self.running.iter().map(|r| r.request).collect()
    }

    /// Advance every running animation by `dt`, returning completions.
    pub fn advance(&mut self, dt: Duration) -> Vec<SwipeEvent> {
        let mut done = Vec::new();
        let mut still_running = Vec::with_capacity(self.running.len());
        for mut run in std::mem::take(&mut self.running) {
            run.elapsed += dt;
            let duration = match run.request {
                Started::Settle { duration, .. } | Started::Height { duration, .. } => duration,
            };
            let t = if duration.is_zero() {
                1.0
            } else {
                (run.elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0)
            };
            self.apply(&run, t);
            if t >= 1.0 {
                tracing::trace!(token = run.request.token().0, "animation finished");
                done.push(completion(&run.request));
            } else {
                still_running.push(run);
            }
        }
        self.running = still_running;
        done
    }

    /// Jump one animation to its end, returning its completion.
    pub fn complete(&mut self, token: AnimationToken) -> Option<SwipeEvent> {
        let index = self.running.iter().position(|r| r.request.token() == token)?;
        let run = self.running.remove(index);
        self.apply(&run, 1.0);
        tracing::trace!(token = token.0, "animation jumped to end");
        Some(completion(&run.request))
    }

    /// Jump every running animation to its end.
    pub fn finish_all(&mut self) -> Vec<SwipeEvent> {
        self.running_tokens()
            .into_iter()
            .filter_map(|token| self.complete(token))
            .collect()
    }

    fn apply(&mut self, run: &Running, t: f32) {
        let eased = ease_out(t);
        match run.request {
            Started::Settle { view, target, .. } => {
                let from = run.from;
                let props = self.props_mut(view);
                props.translation_x = lerp(from.translation_x, target.translation_x, eased);
                if let Some(opacity) = target.opacity {
                    props.opacity = lerp(from.opacity, opacity, eased);
                }
            }
            Started::Height { view, from, to, .. } => {
                self.props_mut(view).height = lerp(from, to, eased);
            }
        }
    }
}

fn completion(request: &Started) -> SwipeEvent {
    match request {
        Started::Settle { token, .. } => SwipeEvent::AnimationSettled(*token),
        Started::Height { token, .. } => SwipeEvent::DismissCollapsed(*token),
    }
}

impl Animator for RecordingAnimator {
    fn set_translation_x(&mut self, view: ViewId, value: f32) {
        self.props_mut(view).translation_x = value;
    }

    fn set_opacity(&mut self, view: ViewId, value: f32) {
        self.props_mut(view).opacity = value;
    }

    fn height(&self, view: ViewId) -> f32 {
        self.props(view).height
    }

    fn set_height(&mut self, view: ViewId, value: f32) {
        self.props_mut(view).height = value;
    }

    fn animate(
        &mut self,
        view: ViewId,
        target: SettleTarget,
        duration: Duration,
        token: AnimationToken,
    ) {
        let request = Started::Settle {
            view,
            target,
            duration,
            token,
        };
        self.started.push(request);
        self.running.push(Running {
            request,
            from: self.props(view),
            elapsed: Duration::ZERO,
        });
    }

    fn animate_height(
        &mut self,
        view: ViewId,
        from: f32,
        to: f32,
        duration: Duration,
        token: AnimationToken,
    ) {
        let request = Started::Height {
            view,
            from,
            to,
            duration,
            token,
        };
        self.started.push(request);
        self.running.push(Running {
            request,
            from: self.props(view),
            elapsed: Duration::ZERO,
        });
    }
}
