use std::time::Duration;

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::catalog::CATEGORIES;
use crate::clipboard::{copy_text, CopyFeedback};
use crate::config::AppConfig;
use crate::dispatch::{Dispatcher, Intent, Presenter, UiCommand};
use crate::keyboard::{KeyCommand, KeyInput};
use crate::render::{
    indicator, toggle_label, DisplayUnit, NoteCard, ViewModel, NO_RESULTS_ICON, NO_RESULTS_TEXT,
};

type KeyedUnit = ((u64, &'static str), DisplayUnit);

#[derive(Clone, Copy)]
struct WebPresenter {
    view: RwSignal<ViewModel>,
    search_text: RwSignal<String>,
    search_ref: NodeRef<html::Input>,
    toast: RwSignal<Option<(u64, &'static str)>>,
    toast_ms: u32,
    optimistic_copy: bool,
}

impl WebPresenter {
    fn show_toast(self, message: &'static str) {
        let seq = self.toast.get_untracked().map(|(seq, _)| seq + 1).unwrap_or(0);
        self.toast.set(Some((seq, message)));
        let toast = self.toast;
        set_timeout(
            move || {
                // A newer toast owns the slot.
                if toast.get_untracked().is_some_and(|(current, _)| current == seq) {
                    toast.set(None);
                }
            },
            Duration::from_millis(self.toast_ms.into()),
        );
    }
}

impl Presenter for WebPresenter {
    fn apply(&mut self, command: UiCommand) {
        match command {
            UiCommand::Render(view) => self.view.set(view),
            UiCommand::ResetSearchInput => self.search_text.set(String::new()),
            UiCommand::FocusSearch => {
                if let Some(input) = self.search_ref.get_untracked() {
                    let _ = input.focus();
                }
            }
            UiCommand::BlurSearch => {
                if let Some(input) = self.search_ref.get_untracked() {
                    let _ = input.blur();
                }
            }
            UiCommand::Copy(text) => {
                let presenter = *self;
                spawn_local(async move {
                    let result = copy_text(&text).await;
                    match &result {
                        Ok(method) => log::debug!("copied {} chars via {method:?}", text.chars().count()),
                        Err(err) => log::error!("failed to copy: {err}"),
                    }
                    let feedback = CopyFeedback::for_result(&result, presenter.optimistic_copy);
                    presenter.show_toast(feedback.message());
                });
            }
        }
    }
}

fn note_card_view(
    card: NoteCard,
    view: RwSignal<ViewModel>,
    dispatch: impl Fn(Intent) + Copy + 'static,
) -> AnyView {
    let id = card.id;
    let is_expanded = move || view.with(|v| v.is_expanded(id));
    let title = card
        .title_segments
        .into_iter()
        .map(|segment| {
            if segment.matched {
                view! { <mark class="match">{segment.text}</mark> }.into_any()
            } else {
                view! { <span>{segment.text}</span> }.into_any()
            }
        })
        .collect_view();
    let tags = card
        .tags
        .iter()
        .map(|tag| view! { <span class="tag">{*tag}</span> })
        .collect_view();

    view! {
        <div class="note-card" style=format!("animation-delay: {}ms;", card.entrance_delay_ms)>
            <div class="note-header">
                <h3 class="note-title" title=card.title on:click=move |_| dispatch(Intent::ToggleExpand(id.to_string()))>
                    {title}
                </h3>
                <div class="note-actions">
                    <button class="copy-btn" title="複製筆記" on:click=move |_| dispatch(Intent::Copy(id.to_string()))>
                        "📋"
                    </button>
                    <button
                        class="expand-btn"
                        title=move || toggle_label(is_expanded())
                        on:click=move |_| dispatch(Intent::ToggleExpand(id.to_string()))
                    >
                        {move || indicator(is_expanded())}
                    </button>
                </div>
            </div>
            <div class="note-content" class:expanded=is_expanded inner_html=card.content_html></div>
            <div class="note-tags">{tags}</div>
        </div>
    }
    .into_any()
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let Some(dispatcher) = Dispatcher::new(
        CATEGORIES,
        config.initial_category.as_deref(),
        config.render_options(),
    ) else {
        log::error!("note catalog is empty");
        return view! { <main class="app-layout">"No notes available."</main> }.into_any();
    };

    let view = RwSignal::new(dispatcher.view());
    let dispatcher = StoredValue::new(dispatcher);
    let search_text = RwSignal::new(String::new());
    let search_ref = NodeRef::<html::Input>::new();
    let toast = RwSignal::new(None::<(u64, &'static str)>);
    let (loading, set_loading) = signal(true);
    let pending_tab = RwSignal::new(None::<&'static str>);

    let presenter = WebPresenter {
        view,
        search_text,
        search_ref,
        toast,
        toast_ms: config.copy_toast_ms,
        optimistic_copy: config.optimistic_copy_feedback,
    };

    let dispatch = move |intent: Intent| {
        let mut presenter = presenter;
        dispatcher.update_value(|d| d.handle(intent, &mut presenter));
    };

    set_timeout(
        move || set_loading.set(false),
        Duration::from_millis(config.initial_load_ms.into()),
    );

    // Tab switches show the overlay first and land after a short delay.
    let switch_delay = Duration::from_millis(config.switch_delay_ms.into());
    let request_category = move |id: &'static str| {
        let current = dispatcher.with_value(|d| d.state().category().id);
        if id == current || pending_tab.get_untracked().is_some() {
            return;
        }
        pending_tab.set(Some(id));
        set_loading.set(true);
        set_timeout(
            move || {
                dispatch(Intent::SelectCategory(id.to_string()));
                pending_tab.set(None);
                set_loading.set(false);
            },
            switch_delay,
        );
    };

    let _ = window_event_listener(leptos::ev::keydown, move |ev| {
        let search_focused = match (search_ref.get_untracked(), document().active_element()) {
            (Some(input), Some(active)) => {
                let input: &leptos::web_sys::Element = &input;
                *input == active
            }
            _ => false,
        };
        let input = KeyInput {
            ctrl: ev.ctrl_key(),
            meta: ev.meta_key(),
            search_focused,
            ..KeyInput::new(ev.key())
        };
        let Some(command) = dispatcher.with_value(|d| d.key_command(&input)) else {
            return;
        };
        if command.prevents_default() {
            ev.prevent_default();
        }
        match command {
            KeyCommand::SelectTab(index) => {
                if let Some(category) = CATEGORIES.get(index) {
                    request_category(category.id);
                }
            }
            other => dispatch(Intent::from(other)),
        }
    });

    let tab_bar = move || {
        let pending = pending_tab.get();
        view.with(|v| v.tabs.clone())
            .into_iter()
            .map(|tab| {
                let active = pending.map_or(tab.active, |id| id == tab.id);
                view! {
                    <button
                        class="tab-btn"
                        class:active=active
                        data-category=tab.id
                        title=format!("{} ({})", tab.name, tab.shortcut)
                        on:click=move |_| request_category(tab.id)
                    >
                        {tab.name}
                    </button>
                }
            })
            .collect_view()
    };

    let keyed_units = move || {
        view.with(|v| {
            v.units
                .iter()
                .enumerate()
                .map(|(idx, unit)| (v.unit_key(idx), unit.clone()))
                .collect::<Vec<KeyedUnit>>()
        })
    };

    view! {
        <main class="app-layout">
            <header class="app-header">
                <nav class="tab-bar">{tab_bar}</nav>
                <input
                    node_ref=search_ref
                    id="search-input"
                    class="search-input"
                    type="text"
                    autocomplete="off"
                    placeholder=move || view.with(|v| v.search_placeholder.clone())
                    prop:value=move || search_text.get()
                    on:input=move |ev| {
                        let term = event_target_value(&ev);
                        search_text.set(term.clone());
                        dispatch(Intent::Search(term));
                    }
                />
            </header>
            <section id="notes-container" class="notes-container">
                <For
                    each=keyed_units
                    key=|entry: &KeyedUnit| entry.0
                    children=move |(_, unit): KeyedUnit| match unit {
                        DisplayUnit::Note(card) => note_card_view(card, view, dispatch),
                        DisplayUnit::NoResults => view! {
                            <div class="no-results">
                                <div class="no-results-icon">{NO_RESULTS_ICON}</div>
                                {NO_RESULTS_TEXT}
                            </div>
                        }
                        .into_any(),
                    }
                />
            </section>
            <div class="copy-modal" class:hidden=move || toast.get().is_none()>
                {move || toast.get().map(|(_, message)| message)}
            </div>
            <div class="loading-overlay" class:hidden=move || !loading.get()>
                <div class="spinner"></div>
            </div>
        </main>
    }
    .into_any()
}
