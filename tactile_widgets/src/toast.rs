// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Toast: a transient message that dismisses itself.

use log::debug;
use tactile_aria::{Role, Slot};

/// Time a toast stays up when nothing else is configured, in milliseconds.
pub const DEFAULT_DURATION_MS: u64 = 5000;

/// How assistive technology announces a toast.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Urgency {
    /// Announced when the user is idle (`role="status"`).
    #[default]
    Polite,
    /// Announced immediately (`role="alert"`).
    Assertive,
}

impl Urgency {
    /// The live-region role.
    pub fn role(self) -> Role {
        match self {
            Self::Polite => Role::Status,
            Self::Assertive => Role::Alert,
        }
    }
}

/// Construction parameters of a [`Toast`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ToastConfig {
    /// Auto-dismiss delay in milliseconds; `None` keeps the toast until dismissed.
    pub duration: Option<u64>,
    /// Announcement urgency.
    pub urgency: Urgency,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            duration: Some(DEFAULT_DURATION_MS),
            urgency: Urgency::Polite,
        }
    }
}

/// Attributes of a toast.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ToastAria {
    /// `data-slot`
    pub slot: Slot,
    /// `role`
    pub role: Role,
    /// `aria-live`
    pub live: Option<&'static str>,
    /// `aria-atomic`
    pub atomic: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Timer {
    Idle,
    Running { deadline: u64 },
    Paused { remaining: u64 },
}

/// Visibility and auto-dismiss timer of one toast.
///
/// The host drives the timer: it calls [`tick`](Toast::tick) at or after
/// [`next_deadline`](Toast::next_deadline). Unmounting cancels the timer, so a
/// late tick never dismisses a toast that is gone.
#[derive(Clone, Debug)]
pub struct Toast {
    config: ToastConfig,
    timer: Timer,
    visible: bool,
}

impl Toast {
    /// Create a hidden toast.
    pub fn new(config: ToastConfig) -> Self {
        Self {
            config,
            timer: Timer::Idle,
            visible: false,
        }
    }

    /// The toast is shown at `now`; starts the timer.
    pub fn mount(&mut self, now: u64) {
        self.visible = true;
        self.start(now);
    }

    /// The toast is gone; cancels the timer.
    pub fn unmount(&mut self) {
        self.visible = false;
        self.timer = Timer::Idle;
    }

    fn start(&mut self, now: u64) {
        self.timer = match self.config.duration {
            Some(duration) => Timer::Running {
                deadline: now.saturating_add(duration),
            },
            None => Timer::Idle,
        };
    }

    /// Returns `true` while the toast shows.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns `true` while the timer is paused.
    pub fn is_paused(&self) -> bool {
        matches!(self.timer, Timer::Paused { .. })
    }

    /// Stop the clock, for example while the pointer hovers the toast.
    pub fn pause(&mut self, now: u64) {
        if let Timer::Running { deadline } = self.timer {
            self.timer = Timer::Paused {
                remaining: deadline.saturating_sub(now),
            };
        }
    }

    /// Restart the clock with the time that was left.
    pub fn resume(&mut self, now: u64) {
        if let Timer::Paused { remaining } = self.timer {
            self.timer = Timer::Running {
                deadline: now.saturating_add(remaining),
            };
        }
    }

    /// When the host should call [`tick`](Self::tick) next.
    pub fn next_deadline(&self) -> Option<u64> {
        match self.timer {
            Timer::Running { deadline } => Some(deadline),
            Timer::Idle | Timer::Paused { .. } => None,
        }
    }

    /// Advance the clock. Returns `true` if the toast dismissed itself.
    pub fn tick(&mut self, now: u64) -> bool {
        match self.timer {
            Timer::Running { deadline } if self.visible && now >= deadline => self.dismiss(),
            _ => false,
        }
    }

    /// Hide the toast. Returns `true` if it was showing.
    pub fn dismiss(&mut self) -> bool {
        self.timer = Timer::Idle;
        if !self.visible {
            debug!("dismissing a toast that isn't showing");
            return false;
        }
        self.visible = false;
        true
    }

    /// Change the auto-dismiss delay. A running timer restarts from `now`.
    pub fn set_duration(&mut self, duration: Option<u64>, now: u64) {
        if self.config.duration == duration {
            return;
        }
        self.config.duration = duration;
        match self.timer {
            Timer::Running { .. } => self.start(now),
            Timer::Paused { .. } => {
                self.timer = duration.map_or(Timer::Idle, |remaining| Timer::Paused { remaining });
            }
            Timer::Idle if self.visible => self.start(now),
            Timer::Idle => {}
        }
    }

    /// Attributes of the toast.
    pub fn aria(&self) -> ToastAria {
        let role = self.config.urgency.role();
        ToastAria {
            slot: Slot::Toast,
            role,
            live: role.live(),
            atomic: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismisses_after_duration() {
        let mut t = Toast::new(ToastConfig::default());
        t.mount(1_000);
        assert_eq!(t.next_deadline(), Some(6_000));
        assert!(!t.tick(5_999));
        assert!(t.tick(6_000));
        assert!(!t.is_visible());
        assert!(!t.tick(7_000));
    }

    #[test]
    fn pause_keeps_remaining_time() {
        let mut t = Toast::new(ToastConfig {
            duration: Some(1_000),
            ..ToastConfig::default()
        });
        t.mount(0);
        t.pause(400);
        assert!(t.is_paused());
        assert!(!t.tick(5_000));
        t.resume(10_000);
        assert_eq!(t.next_deadline(), Some(10_600));
        assert!(t.tick(10_600));
    }

    #[test]
    fn unmount_cancels_the_timer() {
        let mut t = Toast::new(ToastConfig::default());
        t.mount(0);
        t.unmount();
        assert_eq!(t.next_deadline(), None);
        assert!(!t.tick(DEFAULT_DURATION_MS));
    }

    #[test]
    fn persistent_toast_waits_for_dismiss() {
        let mut t = Toast::new(ToastConfig {
            duration: None,
            ..ToastConfig::default()
        });
        t.mount(0);
        assert!(!t.tick(u64::MAX));
        assert!(t.dismiss());
        assert!(!t.dismiss());
    }

    #[test]
    fn new_duration_restarts_the_clock() {
        let mut t = Toast::new(ToastConfig::default());
        t.mount(0);
        t.set_duration(Some(2_000), 1_000);
        assert_eq!(t.next_deadline(), Some(3_000));
        t.set_duration(None, 1_500);
        assert_eq!(t.next_deadline(), None);
        t.set_duration(Some(500), 2_000);
        assert_eq!(t.next_deadline(), Some(2_500));
    }

    #[test]
    fn urgency_picks_the_live_region() {
        let polite = Toast::new(ToastConfig::default()).aria();
        assert_eq!((polite.role, polite.live), (Role::Status, Some("polite")));
        let urgent = Toast::new(ToastConfig {
            urgency: Urgency::Assertive,
            ..ToastConfig::default()
        })
        .aria();
        assert_eq!((urgent.role, urgent.live), (Role::Alert, Some("assertive")));
    }
}
