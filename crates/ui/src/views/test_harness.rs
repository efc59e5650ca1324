use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;

use reveal_core::model::{MediaUri, Prompt, SecretWord, Show, Slide, SlideId};
use reveal_core::time::fixed_clock;
use services::{NullPlayback, ShowRunner};

use crate::context::{UiApp, build_app_context};
use crate::views::ShowView;
use crate::views::show::ShowTestHandles;
use crate::vm::ShowIntent;

#[derive(Clone)]
struct TestApp {
    show: Arc<Show>,
    runner: Arc<ShowRunner>,
}

impl UiApp for TestApp {
    fn show(&self) -> Arc<Show> {
        Arc::clone(&self.show)
    }

    fn runner(&self) -> Arc<ShowRunner> {
        Arc::clone(&self.runner)
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: ShowTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ShowViewHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { ShowView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: ShowTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Dispatch one intent and drive the dom until the spawned work landed.
    pub async fn dispatch(&mut self, intent: ShowIntent) {
        self.handles.dispatch().call(intent);
        drive_dom(&mut self.dom);
        self.drive_async().await;
        drive_dom(&mut self.dom);
    }

    pub async fn type_word(&mut self, word: &str) {
        for ch in word.chars() {
            self.dispatch(ShowIntent::Key(ch.to_string())).await;
        }
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

fn slide(id: u64, secret: &str) -> Slide {
    Slide::new(
        SlideId::new(id),
        SecretWord::parse(secret).expect("harness secret"),
        MediaUri::from_file(format!("/videos/{id}.mp4")).expect("harness media"),
        Prompt::parse(format!("Type {secret}")).expect("harness prompt"),
    )
}

pub fn setup_show_harness(secrets: &[&str]) -> ViewHarness {
    let slides = secrets
        .iter()
        .enumerate()
        .map(|(i, &secret)| slide(i as u64 + 1, secret))
        .collect();
    let show = Arc::new(Show::new(slides).expect("harness show"));
    let runner = Arc::new(ShowRunner::new(fixed_clock(), Arc::new(NullPlayback)));
    let handles = ShowTestHandles::default();

    let app = Arc::new(TestApp { show, runner });
    let dom = VirtualDom::new_with_props(
        ShowViewHarness,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    ViewHarness { dom, handles }
}
