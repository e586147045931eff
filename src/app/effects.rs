//! Browser binding for the motion engine: element tables, the
//! IntersectionObserver lifecycle, and inline-style writes. Everything that
//! touches live elements is hydrate-only; the server renders markup and
//! nothing else.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use leptos::html::ElementType;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::motion::sequence::{Sequence, SequencePlayer};
use crate::motion::{
    LoopTween, MotionError, Scheduler, StepBinding, TargetId, TriggerHandle, TriggerOptions,
    VisualState,
};

#[cfg(feature = "hydrate")]
use send_wrapper::SendWrapper;

/// Long frames (tab switches, debugger pauses) are clamped so animations
/// resume instead of snapping to their end states.
const MAX_TICK_MS: f64 = 100.0;

/// Late-bound element lookup. Resolving to `None` skips the element, it is
/// never an error.
pub type TargetRef = Rc<dyn Fn() -> Option<HtmlElement>>;

/// Erase a typed `NodeRef` into a [`TargetRef`].
pub fn target_of<E>(node: NodeRef<E>) -> TargetRef
where
    E: ElementType + 'static,
    E::Output: JsCast + Clone + Into<HtmlElement> + 'static,
{
    Rc::new(move || node.get().map(Into::into))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AmbientHandle(u64);

struct OneShot {
    player: SequencePlayer,
    targets: Vec<Option<HtmlElement>>,
    on_done: Option<Rc<dyn Fn()>>,
}

struct AmbientGroup {
    element: Option<HtmlElement>,
    tweens: Vec<LoopTween>,
    elapsed_ms: f64,
}

#[derive(Default)]
struct MotionDom {
    scheduler: Scheduler,
    targets: HashMap<TriggerHandle, Vec<Option<HtmlElement>>>,
    one_shots: Vec<OneShot>,
    ambients: HashMap<u64, AmbientGroup>,
    next_ambient: u64,
}

/// Page-wide owner of every animation: scheduler registrations, one-shot
/// sequences and ambient loops, plus the element each target id maps to.
/// One `requestAnimationFrame` loop in `App` drives [`PageMotion::tick`].
#[derive(Clone, Default)]
pub struct PageMotion {
    inner: Rc<RefCell<MotionDom>>,
}

impl PageMotion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a visibility-triggered sequence and immediately force every
    /// resolved target into its from-state so nothing flashes unstyled.
    pub fn register(
        &self,
        options: TriggerOptions,
        steps: Vec<StepBinding>,
        targets: Vec<Option<HtmlElement>>,
    ) -> Result<TriggerHandle, MotionError> {
        let mut dom = self.inner.borrow_mut();
        let handle = dom.scheduler.register(options, steps)?;
        for (index, target) in targets.iter().enumerate() {
            if target.is_none() {
                log::debug!("animation target {index} did not resolve; it will be skipped");
            }
        }
        for (target, state) in dom.scheduler.initial_frame(handle) {
            apply_to(&targets, target, &state);
        }
        dom.targets.insert(handle, targets);
        Ok(handle)
    }

    pub fn set_visible(&self, handle: TriggerHandle, visible: bool) {
        self.inner.borrow_mut().scheduler.set_visible(handle, visible);
    }

    /// Drop a registration and its element table; any pending tick for it is
    /// cancelled before this returns.
    pub fn unregister(&self, handle: TriggerHandle) {
        let mut dom = self.inner.borrow_mut();
        dom.scheduler.unregister(handle);
        dom.targets.remove(&handle);
    }

    /// Play a sequence immediately, independent of any trigger. Used for the
    /// splash timeline and the main-tree fade-in. `on_done` fires once, after
    /// the final frame has been applied.
    pub fn play_once(
        &self,
        steps: Vec<StepBinding>,
        targets: Vec<Option<HtmlElement>>,
        on_done: Option<Rc<dyn Fn()>>,
    ) -> Result<(), MotionError> {
        let sequence = Sequence::new(steps)?;
        let mut player = SequencePlayer::new(sequence);
        for (target, state) in player.sample() {
            apply_to(&targets, target, &state);
        }
        player.play_forward();
        self.inner.borrow_mut().one_shots.push(OneShot {
            player,
            targets,
            on_done,
        });
        Ok(())
    }

    /// Attach always-on loop tweens to one element.
    pub fn animate_loop(&self, element: Option<HtmlElement>, tweens: Vec<LoopTween>) -> AmbientHandle {
        let mut dom = self.inner.borrow_mut();
        let id = dom.next_ambient;
        dom.next_ambient += 1;
        dom.ambients.insert(
            id,
            AmbientGroup {
                element,
                tweens,
                elapsed_ms: 0.0,
            },
        );
        AmbientHandle(id)
    }

    pub fn stop_loop(&self, handle: AmbientHandle) {
        self.inner.borrow_mut().ambients.remove(&handle.0);
    }

    /// One animation frame. Completion callbacks are collected while the
    /// interior borrow is held and invoked after it is released, so a
    /// callback may re-enter (flip the load gate, unregister a trigger)
    /// without panicking the `RefCell`.
    pub fn tick(&self, delta_ms: f64) {
        let delta_ms = delta_ms.clamp(0.0, MAX_TICK_MS);
        let callbacks = {
            let mut dom = self.inner.borrow_mut();
            let dom = &mut *dom;

            for (handle, updates) in dom.scheduler.tick(delta_ms) {
                if let Some(targets) = dom.targets.get(&handle) {
                    for (target, state) in &updates {
                        apply_to(targets, *target, state);
                    }
                }
            }

            for shot in &mut dom.one_shots {
                shot.player.advance(delta_ms);
                for (target, state) in shot.player.sample() {
                    apply_to(&shot.targets, target, &state);
                }
            }
            let mut finished = Vec::new();
            let mut index = 0;
            while index < dom.one_shots.len() {
                if dom.one_shots[index].player.is_playing() {
                    index += 1;
                } else {
                    let shot = dom.one_shots.swap_remove(index);
                    if let Some(on_done) = shot.on_done {
                        finished.push(on_done);
                    }
                }
            }

            for group in dom.ambients.values_mut() {
                group.elapsed_ms += delta_ms;
                if let Some(element) = &group.element {
                    let mut state = VisualState::new();
                    for tween in &group.tweens {
                        tween.apply_to(&mut state, group.elapsed_ms);
                    }
                    apply_state(element, &state);
                }
            }

            finished
        };
        for on_done in callbacks {
            on_done();
        }
    }
}

fn apply_to(targets: &[Option<HtmlElement>], target: TargetId, state: &VisualState) {
    if let Some(Some(element)) = targets.get(target) {
        apply_state(element, state);
    }
}

/// Write a resolved snapshot as inline styles. Translate/scale/rotate
/// compose into a single `transform` so stacked tracks never clobber each
/// other.
pub(crate) fn apply_state(element: &HtmlElement, state: &VisualState) {
    let style = element.style();
    if let Some(opacity) = state.opacity {
        let _ = style.set_property("opacity", &opacity.to_string());
    }
    if state.x.is_some() || state.y.is_some() || state.scale.is_some() || state.rotation.is_some()
    {
        let mut transform = format!(
            "translate({}px, {}px)",
            state.x.unwrap_or(0.0),
            state.y.unwrap_or(0.0)
        );
        if let Some(scale) = state.scale {
            transform.push_str(&format!(" scale({scale})"));
        }
        if let Some(rotation) = state.rotation {
            transform.push_str(&format!(" rotate({rotation}deg)"));
        }
        let _ = style.set_property("transform", &transform);
    }
    if let Some(blur) = state.blur {
        let _ = style.set_property("filter", &format!("blur({blur}px)"));
    }
    if let Some(width) = state.width_pct {
        let _ = style.set_property("width", &format!("{width}%"));
    }
}

/// Wire a section's entrance: register its steps with the page scheduler,
/// observe the trigger element at `enter_threshold`, and tear everything
/// down when the section unmounts. Returns a signal that tracks whether the
/// trigger is currently past its threshold.
pub fn use_reveal(
    trigger: TargetRef,
    targets: Vec<TargetRef>,
    options: TriggerOptions,
    steps: Vec<StepBinding>,
) -> ReadSignal<bool> {
    let (entered, set_entered) = signal(false);

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsValue;
        use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

        type ObserverSlot = Option<(
            IntersectionObserver,
            Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
        )>;

        let Some(motion) = use_context::<PageMotion>() else {
            log::error!("PageMotion context missing; entrance animations are disabled");
            return entered;
        };

        let observer_slot: StoredValue<ObserverSlot, LocalStorage> = StoredValue::new_local(None);
        let handle_slot = StoredValue::new(None::<TriggerHandle>);

        let register_motion = motion.clone();
        Effect::new(move |_| {
            if handle_slot.get_value().is_some() {
                return;
            }
            // NodeRef reads are reactive: this re-runs once the trigger
            // element mounts.
            let Some(element) = trigger() else {
                return;
            };
            let resolved: Vec<Option<HtmlElement>> = targets.iter().map(|t| t()).collect();
            let handle = match register_motion.register(options, steps.clone(), resolved) {
                Ok(handle) => handle,
                Err(err) => {
                    log::error!("failed to register entrance animation: {err}");
                    return;
                }
            };
            handle_slot.set_value(Some(handle));

            let observer_motion = register_motion.clone();
            let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                move |entries: js_sys::Array, _: IntersectionObserver| {
                    // A fast scroll can batch several crossings into one
                    // callback, oldest first. Replay them all so the newest
                    // state is the one that sticks.
                    for entry in entries.iter() {
                        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                            continue;
                        };
                        let visible = if options.enter_threshold <= 0.0 {
                            entry.is_intersecting()
                        } else {
                            entry.intersection_ratio() >= options.enter_threshold
                        };
                        observer_motion.set_visible(handle, visible);
                        set_entered(visible);
                    }
                },
            );
            let init = IntersectionObserverInit::new();
            init.set_threshold(&JsValue::from_f64(options.enter_threshold));
            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            {
                Ok(observer) => {
                    observer.observe(&element);
                    observer_slot.set_value(Some((observer, callback)));
                }
                Err(err) => log::error!("failed to create viewport observer: {err:?}"),
            }
        });

        let cleanup_motion = SendWrapper::new(motion);
        on_cleanup(move || {
            if let Some((observer, _callback)) =
                observer_slot.try_update_value(|slot| slot.take()).flatten()
            {
                observer.disconnect();
            }
            if let Some(handle) = handle_slot.get_value() {
                cleanup_motion.unregister(handle);
            }
        });
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = (trigger, targets, options, steps, set_entered);

    entered
}

/// Attach ambient loop tweens to an element for as long as it stays mounted.
pub fn use_ambient(target: TargetRef, tweens: Vec<LoopTween>) {
    #[cfg(feature = "hydrate")]
    {
        let Some(motion) = use_context::<PageMotion>() else {
            log::error!("PageMotion context missing; ambient motion is disabled");
            return;
        };
        let handle_slot = StoredValue::new(None::<AmbientHandle>);

        let attach_motion = motion.clone();
        Effect::new(move |_| {
            if handle_slot.get_value().is_some() {
                return;
            }
            let Some(element) = target() else {
                return;
            };
            handle_slot.set_value(Some(
                attach_motion.animate_loop(Some(element), tweens.clone()),
            ));
        });

        let cleanup_motion = SendWrapper::new(motion);
        on_cleanup(move || {
            if let Some(handle) = handle_slot.get_value() {
                cleanup_motion.stop_loop(handle);
            }
        });
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = (target, tweens);
}

/// Smooth-scroll the viewport to a named section anchor.
pub fn scroll_to_section(id: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(element) = document.get_element_by_id(id) else {
        log::warn!("no section anchor named `{id}`");
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// The splash screen owns the page while it is up; keep the document from
/// scrolling underneath it.
pub fn lock_body_scroll(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let value = if locked { "hidden" } else { "auto" };
    let _ = body.style().set_property("overflow", value);
}
