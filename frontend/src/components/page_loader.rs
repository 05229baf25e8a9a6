use std::{cell::RefCell, rc::Rc};

use abzarestan_shared::splash::{
    LoaderPhase, LoaderProgress, FORCE_COMPLETE_MS, HIDE_DELAY_MS, LOADING_TEXT, REMOVE_DELAY_MS,
    REVEAL_MS, TICK_MS,
};
use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

use crate::{
    config::{asset_path, LOGO_PATH},
    i18n::current::header as header_text,
    utils::{page_rng, toggle_body_class},
};

/// Full-screen splash with a simulated progress bar. Removes itself once the
/// bar completes; completion is forced after two seconds.
#[function_component(PageLoader)]
pub fn page_loader() -> Html {
    let snapshot = use_state(LoaderProgress::new);

    {
        let snapshot = snapshot.clone();
        use_effect_with((), move |_| {
            let progress = Rc::new(RefCell::new(LoaderProgress::new()));
            let interval_slot: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
            let phase_timers: Rc<RefCell<Vec<Timeout>>> = Rc::new(RefCell::new(Vec::new()));

            // Bar full: hide, then remove and stop ticking.
            let on_complete: Rc<dyn Fn()> = {
                let progress = progress.clone();
                let snapshot = snapshot.clone();
                let interval_slot = interval_slot.clone();
                let phase_timers = phase_timers.clone();
                Rc::new(move || {
                    snapshot.set(*progress.borrow());

                    let hide = {
                        let progress = progress.clone();
                        let snapshot = snapshot.clone();
                        Timeout::new(HIDE_DELAY_MS, move || {
                            progress.borrow_mut().next_phase();
                            snapshot.set(*progress.borrow());
                            toggle_body_class("loaded", true);
                        })
                    };
                    let remove = {
                        let progress = progress.clone();
                        let snapshot = snapshot.clone();
                        let interval_slot = interval_slot.clone();
                        Timeout::new(HIDE_DELAY_MS + REMOVE_DELAY_MS, move || {
                            if let Some(interval) = interval_slot.borrow_mut().take() {
                                interval.cancel();
                            }
                            progress.borrow_mut().next_phase();
                            snapshot.set(*progress.borrow());
                        })
                    };
                    phase_timers.borrow_mut().extend([hide, remove]);
                })
            };

            let interval = {
                let progress = progress.clone();
                let snapshot = snapshot.clone();
                let on_complete = on_complete.clone();
                let mut rng = page_rng();
                Interval::new(TICK_MS, move || {
                    if progress.borrow().is_complete() {
                        return;
                    }
                    let done = progress.borrow_mut().tick(&mut rng);
                    if done {
                        on_complete();
                    } else {
                        snapshot.set(*progress.borrow());
                    }
                })
            };
            *interval_slot.borrow_mut() = Some(interval);

            let force = {
                let progress = progress.clone();
                Timeout::new(FORCE_COMPLETE_MS, move || {
                    let was_loading = !progress.borrow().is_complete();
                    if was_loading {
                        progress.borrow_mut().finish();
                        on_complete();
                    }
                })
            };
            let reveal = Timeout::new(REVEAL_MS, || toggle_body_class("loaded", true));

            move || {
                if let Some(interval) = interval_slot.borrow_mut().take() {
                    interval.cancel();
                }
                for timer in phase_timers.borrow_mut().drain(..) {
                    timer.cancel();
                }
                force.cancel();
                reveal.cancel();
            }
        });
    }

    let progress = *snapshot;
    if progress.phase() == LoaderPhase::Removed {
        return Html::default();
    }

    let loader_classes = classes!(
        "page-loader",
        (progress.phase() == LoaderPhase::Hidden).then_some("hidden")
    );
    let bar_classes = classes!("loading-bar", progress.is_complete().then_some("complete"));

    html! {
        <>
            <div class={loader_classes}>
                <div class="loader-content">
                    <div class="loader-logo">
                        <img src={asset_path(LOGO_PATH)} alt={header_text::LOGO_ALT} />
                    </div>
                    <div class="loader-spinner">
                        <div class="spinner-ring"></div>
                    </div>
                    <div class="loader-text">
                        { LOADING_TEXT }<span class="loader-dots"></span>
                    </div>
                </div>
            </div>
            <div class={bar_classes} style={progress.bar_width()}></div>
        </>
    }
}
