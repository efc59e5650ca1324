use std::sync::Arc;

use dioxus::document::eval;
use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;

use reveal_core::session::Phase;

use super::scripts::focus_show_root_script;
use crate::context::AppContext;
use crate::vm::{ShowIntent, ShowVm};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn ShowView() -> Element {
    let ctx = use_context::<AppContext>();
    let runner_for_vm = ctx.runner();
    let show = ctx.show();
    let vm = use_signal(move || Some(ShowVm::new(runner_for_vm.as_ref(), Arc::clone(&show))));
    let mut did_focus = use_signal(|| false);

    // The window has exactly one interactive surface, so focus it once and
    // let `onkeydown` deliver the keyboard stream from then on.
    use_effect(move || {
        if did_focus() {
            return;
        }
        did_focus.set(true);
        let _ = eval(&focus_show_root_script());
    });

    let dispatch_intent = {
        let runner = ctx.runner();
        use_callback(move |intent: ShowIntent| {
            let runner = Arc::clone(&runner);
            let mut vm = vm;
            spawn(async move {
                let taken = { vm.write().take() };
                let Some(mut vm_value) = taken else {
                    return;
                };

                vm_value.dispatch(runner.as_ref(), intent).await;

                // Always put the run back so the view stays usable.
                {
                    let mut guard = vm.write();
                    *guard = Some(vm_value);
                }
            });
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<ShowTestHandles>() {
                handles.register(dispatch_intent, vm);
            }
        }
    }

    let on_key = use_callback(move |evt: KeyboardEvent| {
        // Named keys never reach the session; it filters anything that is
        // not a single character anyway.
        if let Key::Character(value) = evt.data.key() {
            evt.prevent_default();
            dispatch_intent.call(ShowIntent::Key(value.to_string()));
        }
    });

    let vm_guard = vm.read();
    let phase = vm_guard.as_ref().map(ShowVm::phase);
    let prompt = vm_guard
        .as_ref()
        .map(|vm| vm.prompt().to_string())
        .unwrap_or_default();
    let media_src = vm_guard
        .as_ref()
        .map(ShowVm::media_src)
        .unwrap_or_default();
    let slots = vm_guard
        .as_ref()
        .map(ShowVm::letter_slots)
        .unwrap_or_default();
    let summary_line = vm_guard.as_ref().and_then(ShowVm::summary_line);
    let (slide_pos, slide_count) = vm_guard
        .as_ref()
        .map_or((0, 0), |vm| (vm.slide_index() + 1, vm.slide_count()));
    drop(vm_guard);
    let progress_label = format!("Slide {slide_pos} / {slide_count}");

    rsx! {
        div { class: "show-root", id: "show-root", tabindex: "0", onkeydown: on_key,
            video {
                id: "show-video",
                class: "show-video",
                key: "{media_src}",
                src: "{media_src}",
                preload: "auto",
                onended: move |_| dispatch_intent.call(ShowIntent::PlaybackEnded),
            }
            match phase {
                Some(Phase::Idle) => rsx! {
                    div { class: "show-overlay",
                        div { class: "show-idle",
                            h1 { class: "show-prompt", "{prompt}" }
                            p { class: "show-hint", "Type the answer to play the video." }
                            div { class: "letter-slots",
                                for (i, slot) in slots.iter().enumerate() {
                                    div {
                                        key: "{i}",
                                        class: if slot.is_some() { "letter-slot letter-slot--filled" } else { "letter-slot" },
                                        match slot {
                                            Some(ch) => rsx! { "{ch}" },
                                            None => rsx! { "?" },
                                        }
                                    }
                                }
                            }
                            p { class: "show-footer", "{progress_label}" }
                        }
                    }
                },
                Some(Phase::Playing) => rsx! {
                    div { class: "show-skip",
                        button {
                            class: "show-skip-btn",
                            id: "show-skip",
                            r#type: "button",
                            onclick: move |_| dispatch_intent.call(ShowIntent::Skip),
                            "Skip ▸"
                        }
                    }
                },
                Some(Phase::Completed) => rsx! {
                    div { class: "show-overlay",
                        div { class: "show-complete",
                            span { class: "show-complete__badge", "🎉" }
                            h1 { class: "show-complete__title", "That's all, folks!" }
                            p { class: "show-complete__subtitle", "You've gone through all the slides." }
                            if let Some(line) = summary_line.as_ref() {
                                p { class: "show-complete__stats", "{line}" }
                            }
                            button {
                                class: "show-restart-btn",
                                id: "show-restart",
                                r#type: "button",
                                onclick: move |_| dispatch_intent.call(ShowIntent::Restart),
                                "Start Over"
                            }
                        }
                    }
                },
                None => rsx! {},
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct ShowTestHandles {
    dispatch: Rc<RefCell<Option<Callback<ShowIntent>>>>,
    vm: Rc<RefCell<Option<Signal<Option<ShowVm>>>>>,
}

#[cfg(test)]
impl ShowTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<ShowIntent>,
        vm: Signal<Option<ShowVm>>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<ShowIntent> {
        (*self.dispatch.borrow()).expect("show dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<Option<ShowVm>> {
        (*self.vm.borrow()).expect("show vm registered")
    }
}
