//! End-to-end swipe scenarios against the harness doubles.

use std::time::Duration;

use swipelist_core::{
    AnimationToken, GesturePhase, ScrollState, Surface, SwipeAction, SwipeConfig, SwipeError,
    SwipeEvent, SwipeListController, SwipeMode, TouchEvent, TouchMetrics,
};
use swipelist_harness::{
    FakeList, Notification, RecordingAnimator, RecordingListener, Rig, START_X, Started,
    init_test_logging, test_config,
};

fn rig() -> Rig {
    init_test_logging();
    Rig::standard(test_config())
}

fn rig_with(config: SwipeConfig) -> Rig {
    init_test_logging();
    Rig::standard(config)
}

fn opened(position: usize, toward_right: bool) -> Notification {
    Notification::Opened {
        position,
        toward_right,
    }
}

fn closed(position: usize, was_toward_right: bool) -> Notification {
    Notification::Closed {
        position,
        was_toward_right,
    }
}

fn settle_tokens(rig: &Rig) -> Vec<AnimationToken> {
    rig.animator()
        .running()
        .iter()
        .filter(|s| matches!(s, Started::Settle { .. }))
        .map(Started::token)
        .collect()
}

fn collapse_tokens(rig: &Rig) -> Vec<AnimationToken> {
    rig.animator()
        .running()
        .iter()
        .filter(|s| matches!(s, Started::Height { .. }))
        .map(Started::token)
        .collect()
}

// --- Reveal ---

#[test]
fn slow_drag_past_half_width_opens_right() {
    let mut r = rig();
    r.slow_swipe(0, 200.0);
    assert_eq!(r.ctl.phase(), GesturePhase::Settling);
    r.settle();

    assert!(r.ctl.is_open(0));
    assert!(r.ctl.opened_from_right(0));
    assert_eq!(
        r.animator().props(FakeList::front_view(0)).translation_x,
        300.0
    );
    assert_eq!(r.listener().outcomes(), vec![opened(0, true)]);
    assert_eq!(r.ctl.phase(), GesturePhase::Rest);
}

#[test]
fn retracting_an_open_row_a_little_keeps_it_open() {
    let mut r = rig();
    r.slow_swipe(0, 200.0);
    r.settle();
    r.ctl.listener_mut().clear();

    r.drag(0, -50.0, 10);
    assert_eq!(r.listener().last_offset(), Some(250.0));
    r.release_still(START_X - 50.0);
    r.settle();

    assert!(r.ctl.is_open(0));
    assert!(r.listener().outcomes().is_empty());
    assert_eq!(
        r.animator().props(FakeList::front_view(0)).translation_x,
        300.0
    );
}

#[test]
fn retracting_past_half_width_closes() {
    let mut r = rig();
    r.slow_swipe(2, -200.0);
    r.settle();
    assert!(r.ctl.is_open(2));
    assert!(!r.ctl.opened_from_right(2));

    r.slow_swipe(2, 200.0);
    r.settle();
    assert!(!r.ctl.is_open(2));
    assert_eq!(
        r.listener().outcomes(),
        vec![opened(2, false), closed(2, false)]
    );
    assert_eq!(r.animator().props(FakeList::front_view(2)).translation_x, 0.0);
}

#[test]
fn open_offsets_leave_part_of_the_row_visible() {
    let mut config = test_config();
    config.offset_left = 50.0;
    config.offset_right = 80.0;
    let mut r = rig_with(config);

    r.slow_swipe(0, -200.0);
    r.slow_swipe(1, 200.0);
    r.settle();
    assert_eq!(
        r.animator().props(FakeList::front_view(0)).translation_x,
        -250.0
    );
    assert_eq!(
        r.animator().props(FakeList::front_view(1)).translation_x,
        220.0
    );
}

// --- Completion-only state changes ---

#[test]
fn row_state_changes_only_on_completion() {
    let mut r = rig();
    r.down(3);
    for i in 1..=10 {
        r.move_to(START_X + 20.0 * i as f32);
        assert!(!r.ctl.is_open(3), "state flipped mid-drag at step {i}");
    }
    assert_eq!(r.ctl.phase(), GesturePhase::Committed(SwipeAction::Reveal));
    r.release_still(START_X + 200.0);
    assert!(!r.ctl.is_open(3), "state flipped before the settle finished");

    r.advance(Duration::from_millis(100));
    assert!(!r.ctl.is_open(3));
    r.advance(Duration::from_millis(100));
    assert!(r.ctl.is_open(3));
}

#[test]
fn settle_uses_configured_duration() {
    let mut r = rig();
    r.slow_swipe(0, 200.0);
    r.ctl.set_animation_time(Some(Duration::from_millis(350)));
    r.slow_swipe(1, 200.0);
    let durations: Vec<Duration> = r
        .animator()
        .started
        .iter()
        .filter_map(|s| match s {
            Started::Settle { duration, .. } => Some(*duration),
            Started::Height { .. } => None,
        })
        .collect();
    assert_eq!(
        durations,
        vec![Duration::from_millis(200), Duration::from_millis(350)]
    );
}

// --- Release precedence ---

#[test]
fn decisive_fling_overrides_small_displacement() {
    let mut r = rig();
    let y = r.list().row_center_y(0);
    let t = r.now;
    r.dispatch(TouchEvent::down(START_X, y, t).into());
    r.dispatch(TouchEvent::moved(START_X + 10.0, y, t + Duration::from_millis(1)).into());
    r.dispatch(TouchEvent::up(START_X + 5.0, y, t + Duration::from_millis(2)).into());
    r.settle();

    assert!(r.ctl.is_open(0));
    assert_eq!(r.listener().outcomes(), vec![opened(0, true)]);
}

#[test]
fn velocity_above_band_is_not_a_fling() {
    let mut r = rig();
    let y = r.list().row_center_y(0);
    let t = r.now;
    r.dispatch(TouchEvent::down(START_X, y, t).into());
    r.dispatch(TouchEvent::moved(START_X + 20.0, y, t + Duration::from_millis(1)).into());
    // 40 px in 2 ms = 20000 px/s, far above the band.
    r.dispatch(TouchEvent::up(START_X + 40.0, y, t + Duration::from_millis(2)).into());
    r.settle();
    assert!(!r.ctl.is_open(0));
}

#[test]
fn half_width_threshold_without_fling() {
    let mut r = rig();
    r.slow_swipe(0, 151.0);
    r.slow_swipe(1, 149.0);
    r.settle();
    assert!(r.ctl.is_open(0));
    assert!(!r.ctl.is_open(1));
    assert_eq!(r.listener().outcomes(), vec![opened(0, true)]);
}

#[test]
fn fling_toward_the_open_side_keeps_row_open() {
    let mut r = rig();
    r.slow_swipe(0, 200.0);
    r.settle();
    r.ctl.listener_mut().clear();

    let y = r.list().row_center_y(0);
    let t = r.now;
    r.dispatch(TouchEvent::down(START_X, y, t).into());
    r.dispatch(TouchEvent::moved(START_X + 10.0, y, t + Duration::from_millis(2)).into());
    r.dispatch(TouchEvent::up(START_X + 12.0, y, t + Duration::from_millis(4)).into());
    r.settle();

    assert!(r.ctl.is_open(0));
    assert!(r.listener().outcomes().is_empty());
}

// --- Mode restriction ---

#[test]
fn left_only_ignores_rightward_drag_on_closed_row() {
    let mut config = test_config();
    config.mode = SwipeMode::LeftOnly;
    let mut r = rig_with(config);

    r.down(0);
    for i in 1..=10 {
        r.move_to(START_X + 25.0 * i as f32);
        assert_eq!(r.ctl.phase(), GesturePhase::Tracking);
    }
    r.release_still(START_X + 250.0);
    r.settle();

    assert!(!r.ctl.is_open(0));
    assert_eq!(r.listener().last_offset(), None);
    assert_eq!(r.animator().props(FakeList::front_view(0)).translation_x, 0.0);
    assert!(r.animator().started.is_empty());
    assert!(r.list().disallow_requests.is_empty());
}

#[test]
fn left_only_still_opens_left_and_retracts_right() {
    let mut config = test_config();
    config.mode = SwipeMode::LeftOnly;
    let mut r = rig_with(config);

    r.slow_swipe(0, -200.0);
    r.settle();
    assert!(r.ctl.is_open(0));

    r.slow_swipe(0, 200.0);
    r.settle();
    assert!(!r.ctl.is_open(0));
}

#[test]
fn mode_none_never_commits() {
    let mut config = test_config();
    config.mode = SwipeMode::None;
    let mut r = rig_with(config);
    r.slow_swipe(0, -200.0);
    r.settle();
    assert!(!r.ctl.is_open(0));
    assert!(r.listener().events.is_empty());
}

#[test]
fn commit_stops_list_interception_once() {
    let mut r = rig();
    r.drag(0, 100.0, 10);
    assert_eq!(r.list().disallow_requests, vec![true]);
    assert_eq!(r.list().cancels, 1);
}

#[test]
fn vertical_motion_does_not_commit() {
    let mut r = rig();
    r.down(0);
    let y = r.list().row_center_y(0);
    for i in 1..=5 {
        r.move_xy(START_X + 10.0 * i as f32, y + 30.0 * i as f32);
    }
    assert_eq!(r.ctl.phase(), GesturePhase::Tracking);
}

// --- Dismiss ---

#[test]
fn dismiss_slides_fades_collapses_and_restores() {
    let mut config = test_config();
    config.action_right = SwipeAction::Dismiss;
    let mut r = rig_with(config);
    let parent = FakeList::parent_view(4);

    r.drag(4, 75.0, 5);
    let live = r.animator().props(parent);
    assert_eq!(live.translation_x, 75.0);
    assert!((live.opacity - 0.5).abs() < 1e-5);

    r.release_still(START_X + 200.0);
    assert_eq!(r.ctl.pending_dismiss_count(), 1);
    let settle = settle_tokens(&r);
    assert_eq!(settle.len(), 1);
    assert!(r.complete(settle[0]));
    assert_eq!(r.animator().props(parent).opacity, 0.0);
    assert!(r.listener().dismissals().is_empty());

    let collapse = collapse_tokens(&r);
    assert_eq!(collapse.len(), 1);
    assert!(r.complete(collapse[0]));

    assert_eq!(r.listener().dismissals(), vec![vec![4]]);
    let restored = r.animator().props(parent);
    assert_eq!(restored.opacity, 1.0);
    assert_eq!(restored.translation_x, 0.0);
    assert_eq!(restored.height, 40.0);
    assert_eq!(r.ctl.pending_dismiss_count(), 0);
    assert!(!r.ctl.is_open(4));
}

#[test]
fn concurrent_dismissals_report_once_sorted_descending() {
    let mut config = test_config();
    config.action_left = SwipeAction::Dismiss;
    config.action_right = SwipeAction::Dismiss;
    let mut r = rig_with(config);

    r.slow_swipe(1, 200.0);
    r.slow_swipe(6, -200.0);
    r.slow_swipe(3, 200.0);
    for token in settle_tokens(&r) {
        r.complete(token);
    }
    let collapses = collapse_tokens(&r);
    assert_eq!(collapses.len(), 3);

    for token in &collapses[..2] {
        r.complete(*token);
        assert!(r.listener().dismissals().is_empty(), "released before the last collapse");
    }
    r.complete(collapses[2]);
    assert_eq!(r.listener().dismissals(), vec![vec![6, 3, 1]]);
}

#[test]
fn reverted_dismiss_reports_nothing() {
    let mut config = test_config();
    config.action_right = SwipeAction::Dismiss;
    let mut r = rig_with(config);

    r.slow_swipe(2, 60.0);
    assert_eq!(r.ctl.pending_dismiss_count(), 0);
    r.settle();
    assert!(r.listener().dismissals().is_empty());
    let props = r.animator().props(FakeList::parent_view(2));
    assert_eq!(props.translation_x, 0.0);
    assert_eq!(props.opacity, 1.0);
}

#[test]
fn dismissing_row_ignores_new_touches() {
    let mut config = test_config();
    config.action_right = SwipeAction::Dismiss;
    let mut r = rig_with(config);

    r.slow_swipe(2, 200.0);
    assert!(r.ctl.is_settling(2));
    r.down(2);
    assert_eq!(r.ctl.phase(), GesturePhase::Settling);
}

#[test]
fn open_row_swipes_as_reveal_even_with_dismiss_configured() {
    let mut r = rig();
    r.slow_swipe(0, 200.0);
    r.settle();
    r.ctl.set_action_left(SwipeAction::Dismiss);
    r.ctl.set_action_right(SwipeAction::Dismiss);

    r.drag(0, -200.0, 10);
    assert_eq!(r.ctl.phase(), GesturePhase::Committed(SwipeAction::Reveal));
    r.release_still(START_X - 200.0);
    r.settle();
    assert!(!r.ctl.is_open(0));
    assert!(r.listener().dismissals().is_empty());
}

// --- Check ---

#[test]
fn check_swipe_toggles_and_springs_back() {
    let mut config = test_config();
    config.action_left = SwipeAction::Check;
    let mut r = rig_with(config);

    r.slow_swipe(4, -200.0);
    r.settle();
    assert!(r.ctl.is_checked(4));
    assert!(!r.ctl.is_open(4));
    assert_eq!(r.animator().props(FakeList::front_view(4)).translation_x, 0.0);

    r.slow_swipe(4, -200.0);
    r.settle();
    assert!(!r.ctl.is_checked(4));
    assert_eq!(
        r.listener().outcomes(),
        vec![
            Notification::ChoiceChanged {
                position: 4,
                checked: true
            },
            Notification::ChoiceChanged {
                position: 4,
                checked: false
            },
        ]
    );
}

// --- Programmatic open/close ---

#[test]
fn open_and_close_are_idempotent() {
    let mut r = rig();
    r.ctl.open_animate(2);
    r.ctl.open_animate(2);
    assert_eq!(r.animator().in_flight(), 1, "second open while settling");
    r.settle();
    r.ctl.open_animate(2);
    assert_eq!(r.animator().in_flight(), 0);
    assert_eq!(r.listener().outcomes(), vec![opened(2, false)]);

    r.ctl.close_animate(5);
    assert_eq!(r.animator().in_flight(), 0);

    r.ctl.close_animate(2);
    r.settle();
    r.ctl.close_animate(2);
    assert_eq!(r.animator().in_flight(), 0);
    assert_eq!(
        r.listener().outcomes(),
        vec![opened(2, false), closed(2, false)]
    );
}

#[test]
fn programmatic_open_respects_right_only() {
    let mut config = test_config();
    config.mode = SwipeMode::RightOnly;
    let mut r = rig_with(config);
    r.ctl.open_animate(1);
    r.settle();
    assert!(r.ctl.opened_from_right(1));
}

#[test]
fn programmatic_open_before_any_touch_uses_row_width() {
    let mut config = test_config();
    config.offset_right = 40.0;
    let mut r = rig_with(config);
    r.ctl.open_animate(2);

    let target = r.animator().started.iter().find_map(|s| match s {
        Started::Settle { view, target, .. } => Some((*view, target.translation_x)),
        Started::Height { .. } => None,
    });
    assert_eq!(target, Some((FakeList::front_view(2), -300.0)));
    r.settle();
    assert_eq!(
        r.animator().props(FakeList::front_view(2)).translation_x,
        -300.0
    );

    r.ctl.set_mode(SwipeMode::RightOnly);
    r.ctl.open_animate(3);
    r.settle();
    assert_eq!(
        r.animator().props(FakeList::front_view(3)).translation_x,
        260.0
    );
}

#[test]
fn programmatic_close_mid_drag_wins_over_release() {
    let mut r = rig();
    r.slow_swipe(2, 200.0);
    r.settle();

    r.drag(2, -30.0, 3);
    r.ctl.close_animate(2);
    r.release_still(START_X - 30.0);
    assert_eq!(r.animator().in_flight(), 1, "release must not start a second settle");
    r.settle();

    let tx = r.animator().props(FakeList::front_view(2)).translation_x;
    assert!(!r.ctl.is_open(2));
    assert_eq!(tx, 0.0);
}

#[test]
fn off_screen_rows_are_not_animated() {
    let mut r = rig();
    r.ctl.open_animate(15);
    assert_eq!(r.animator().in_flight(), 0);
    assert!(!r.ctl.is_open(15));
}

// --- Click contract ---

#[test]
fn tap_reports_front_and_back_clicks() {
    let mut r = rig();
    r.down(2);
    assert_eq!(
        r.list().clickable.get(&FakeList::front_view(2)),
        Some(&true)
    );
    r.release(START_X);
    r.tap(Surface::Front);
    r.down(3);
    r.release(START_X);
    r.tap(Surface::Back);
    assert_eq!(
        r.listener().outcomes(),
        vec![Notification::FrontClicked(2), Notification::BackClicked(3)]
    );
}

#[test]
fn open_row_front_is_not_clickable_and_tap_closes_it() {
    let mut r = rig();
    r.slow_swipe(1, 200.0);
    r.settle();
    assert_eq!(
        r.list().clickable.get(&FakeList::front_view(1)),
        Some(&false)
    );

    r.down(1);
    r.release(START_X);
    r.tap(Surface::Front);
    r.settle();
    assert!(!r.ctl.is_open(1));
    assert!(!r
        .listener()
        .events
        .iter()
        .any(|n| matches!(n, Notification::FrontClicked(_))));
    assert_eq!(
        r.list().clickable.get(&FakeList::front_view(1)),
        Some(&true)
    );
}

#[test]
fn back_tap_needs_a_back_surface() {
    let mut r = rig();
    r.ctl.host_mut().rows_without_back.push(4);
    r.down(4);
    r.release(START_X);
    r.tap(Surface::Back);
    r.down(5);
    r.release(START_X);
    r.tap(Surface::Back);
    assert_eq!(r.listener().outcomes(), vec![Notification::BackClicked(5)]);
}

#[test]
fn swipe_is_not_a_tap() {
    let mut r = rig();
    r.slow_swipe(0, 60.0);
    r.tap(Surface::Front);
    assert!(r.listener().outcomes().is_empty());
}

#[test]
fn long_press_opens_when_enabled() {
    let mut r = rig();
    r.down(5);
    r.dispatch(SwipeEvent::RowLongPressed);
    r.release(START_X);
    r.settle();
    assert!(r.ctl.is_open(5));

    r.ctl.set_open_on_long_press(false);
    r.down(6);
    r.dispatch(SwipeEvent::RowLongPressed);
    r.settle();
    assert!(!r.ctl.is_open(6));
}

// --- Cancel and pause ---

#[test]
fn cancel_reverts_without_state_change() {
    let mut r = rig();
    r.drag(0, 250.0, 10);
    r.cancel();
    r.settle();
    assert!(!r.ctl.is_open(0));
    assert_eq!(r.animator().props(FakeList::front_view(0)).translation_x, 0.0);
    assert!(r.listener().outcomes().is_empty());
}

#[test]
fn disabled_controller_ignores_new_gestures() {
    let mut r = rig();
    r.ctl.set_enabled(false);
    assert!(!r.down(0));
    r.move_to(START_X + 200.0);
    r.release_still(START_X + 200.0);
    assert_eq!(r.ctl.phase(), GesturePhase::Rest);
    assert!(r.animator().started.is_empty());
}

#[test]
fn pause_does_not_abort_running_animations() {
    let mut r = rig();
    r.slow_swipe(0, 200.0);
    r.ctl.set_enabled(false);
    r.settle();
    assert!(r.ctl.is_open(0));
}

// --- Scroll coordination ---

#[test]
fn touch_scroll_closes_visible_open_rows_and_pauses() {
    let mut r = rig();
    r.slow_swipe(1, 200.0);
    r.slow_swipe(4, -200.0);
    r.settle();
    r.ctl.listener_mut().clear();

    r.dispatch(SwipeEvent::ScrollStateChanged(ScrollState::TouchScroll));
    assert!(r.ctl.is_list_moving());
    assert!(r.ctl.is_paused());
    assert!(!r.down(2));
    r.settle();
    assert!(!r.ctl.is_open(1));
    assert!(!r.ctl.is_open(4));
    assert_eq!(r.listener().outcomes(), vec![closed(1, true), closed(4, false)]);

    r.dispatch(SwipeEvent::ScrollStateChanged(ScrollState::Fling));
    assert!(r.ctl.is_list_moving());
    assert!(!r.ctl.is_paused());
    r.dispatch(SwipeEvent::ScrollStateChanged(ScrollState::Idle));
    assert!(!r.ctl.is_list_moving());
}

#[test]
fn touch_scroll_spares_the_row_being_dragged() {
    let mut r = rig();
    r.slow_swipe(1, 200.0);
    r.slow_swipe(2, 200.0);
    r.settle();
    r.ctl.listener_mut().clear();

    r.drag(2, -30.0, 3);
    r.dispatch(SwipeEvent::ScrollStateChanged(ScrollState::TouchScroll));
    r.release_still(START_X - 30.0);
    r.settle();

    assert!(!r.ctl.is_open(1));
    assert!(r.ctl.is_open(2));
    let tx = r.animator().props(FakeList::front_view(2)).translation_x;
    assert_eq!(tx, 300.0);
    assert_eq!(r.listener().outcomes(), vec![closed(1, true)]);
}

#[test]
fn touch_scroll_leaves_rows_open_when_configured() {
    let mut config = test_config();
    config.close_all_on_list_move = false;
    let mut r = rig_with(config);
    r.slow_swipe(1, 200.0);
    r.settle();
    r.dispatch(SwipeEvent::ScrollStateChanged(ScrollState::TouchScroll));
    r.settle();
    assert!(r.ctl.is_open(1));
}

#[test]
fn scroll_state_does_not_override_explicit_disable() {
    let mut r = rig();
    r.ctl.set_enabled(false);
    r.dispatch(SwipeEvent::ScrollStateChanged(ScrollState::Idle));
    assert!(r.ctl.is_paused());
}

#[test]
fn intercept_claims_vertical_drags_and_forwards_horizontal_ones() {
    use swipelist_core::InterceptState;

    let mut r = rig();
    let y = r.list().row_center_y(0);
    let t = r.now;
    let ms = Duration::from_millis;

    assert!(!r.ctl.intercept_touch(&TouchEvent::down(START_X, y, t)));
    let vertical = TouchEvent::moved(START_X, y + 30.0, t + ms(16));
    assert!(r.ctl.intercept_touch(&vertical));
    assert_eq!(r.ctl.intercept_state(), InterceptState::ScrollingY);
    r.ctl
        .intercept_touch(&TouchEvent::cancel(START_X, y + 30.0, t + ms(32)));

    let t = t + ms(100);
    r.ctl.intercept_touch(&TouchEvent::down(START_X, y, t));
    let sideways = TouchEvent::moved(START_X + 20.0, y, t + ms(16));
    assert!(!r.ctl.intercept_touch(&sideways));
    assert_eq!(r.ctl.intercept_state(), InterceptState::ScrollingX);

    // Once horizontal, events go to the swipe state machine.
    let drag = TouchEvent::moved(START_X + 200.0, y, t + ms(32));
    assert!(r.ctl.intercept_touch(&drag));
    assert_eq!(r.ctl.phase(), GesturePhase::Committed(SwipeAction::Reveal));
    r.ctl
        .intercept_touch(&TouchEvent::up(START_X + 200.0, y, t + Duration::from_secs(2)));
    r.settle();
    assert!(r.ctl.is_open(0));
    assert_eq!(r.ctl.intercept_state(), InterceptState::Rest);
}

// --- Adapter changes ---

#[test]
fn data_set_change_grows_and_notifies() {
    let mut r = rig();
    r.slow_swipe(0, 200.0);
    r.settle();
    r.dispatch(SwipeEvent::DataSetChanged { item_count: 30 });
    assert_eq!(r.ctl.rows().len(), 30);
    assert!(r.ctl.is_open(0));
    assert_eq!(
        r.listener().outcomes().last(),
        Some(&Notification::ListContentsChanged)
    );
}

#[test]
fn adapter_reset_forgets_row_state() {
    let mut r = rig();
    r.slow_swipe(0, 200.0);
    r.settle();
    r.dispatch(SwipeEvent::AdapterReset { item_count: 5 });
    assert_eq!(r.ctl.rows().len(), 5);
    assert!(!r.ctl.is_open(0));
}

#[test]
fn completion_after_reset_is_dropped() {
    let mut r = rig();
    r.slow_swipe(8, 200.0);
    r.dispatch(SwipeEvent::AdapterReset { item_count: 3 });
    r.settle();
    assert!(!r.ctl.is_open(8));
    assert!(r.listener().outcomes().is_empty());
}

#[test]
fn unknown_tokens_are_ignored() {
    let mut r = rig();
    r.dispatch(SwipeEvent::AnimationSettled(AnimationToken(999)));
    r.dispatch(SwipeEvent::DismissCollapsed(AnimationToken(999)));
    assert!(r.listener().events.is_empty());
    assert_eq!(r.ctl.phase(), GesturePhase::Rest);
}

// --- Construction ---

#[test]
fn missing_surfaces_are_fatal() {
    let list = FakeList::new(300.0, 40.0, 5, 5);
    let err = SwipeListController::new(
        SwipeConfig::default(),
        list,
        RecordingAnimator::new(40.0),
        RecordingListener::new(),
    )
    .unwrap_err();
    assert_eq!(err, SwipeError::MissingSurface { which: "front" });
}

#[test]
fn inverted_fling_band_is_fatal() {
    let list = FakeList::new(300.0, 40.0, 5, 5).with_metrics(TouchMetrics {
        min_fling_velocity: 10.0,
        max_fling_velocity: 1.0,
        ..TouchMetrics::default()
    });
    let result = SwipeListController::new(
        test_config(),
        list,
        RecordingAnimator::new(40.0),
        RecordingListener::new(),
    );
    assert!(matches!(result, Err(SwipeError::InvalidMetrics { .. })));
}

#[test]
fn touch_outside_rows_starts_no_session() {
    let mut r = rig();
    let t = r.now;
    r.dispatch(TouchEvent::down(START_X, 10_000.0, t).into());
    assert_eq!(r.ctl.phase(), GesturePhase::Rest);
    r.dispatch(TouchEvent::moved(START_X + 200.0, 10_000.0, t + Duration::from_millis(16)).into());
    assert_eq!(r.ctl.phase(), GesturePhase::Rest);
}
