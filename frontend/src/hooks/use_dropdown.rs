use std::rc::Rc;

use gloo::events::EventListener;
use shared::{ClickTarget, DropdownMenu, TriggerRect};
use wasm_bindgen::JsCast;
use web_sys::{Element, Node};
use yew::prelude::*;

pub enum MenuAction {
    Toggle(TriggerRect, f64),
    DocumentClick(ClickTarget),
    Close,
}

#[derive(Default, PartialEq)]
struct MenuState {
    menu: DropdownMenu,
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut menu = self.menu;
        match action {
            MenuAction::Toggle(trigger, scroll_y) => menu.toggle(trigger, scroll_y),
            MenuAction::DocumentClick(target) => menu.document_click(target),
            MenuAction::Close => menu.close(),
        }
        if menu == self.menu {
            self
        } else {
            Rc::new(Self { menu })
        }
    }
}

pub struct UseDropdownResult {
    pub menu: DropdownMenu,
    pub trigger_ref: NodeRef,
    pub menu_ref: NodeRef,
    pub on_trigger_click: Callback<MouseEvent>,
    pub close: Callback<()>,
}

fn classify(event: &Event, trigger: &NodeRef, menu: &NodeRef) -> ClickTarget {
    let target = event.target().and_then(|target| target.dyn_into::<Node>().ok());
    let contains = |node_ref: &NodeRef| match (node_ref.get(), target.as_ref()) {
        (Some(container), Some(target)) => container.contains(Some(target)),
        _ => false,
    };

    if contains(trigger) {
        ClickTarget::Trigger
    } else if contains(menu) {
        ClickTarget::Menu
    } else {
        ClickTarget::Outside
    }
}

/// Dropdown bound to a trigger element and a menu element. Clicking the
/// trigger toggles it; a click anywhere outside both closes it.
#[hook]
pub fn use_dropdown() -> UseDropdownResult {
    let state = use_reducer(MenuState::default);
    let trigger_ref = use_node_ref();
    let menu_ref = use_node_ref();

    {
        let dispatcher = state.dispatcher();
        let trigger_ref = trigger_ref.clone();
        let menu_ref = menu_ref.clone();

        use_effect_with((), move |_| {
            let document = web_sys::window().and_then(|window| window.document());
            let listener = document.map(|document| {
                EventListener::new(&document, "click", move |event| {
                    let target = classify(event, &trigger_ref, &menu_ref);
                    dispatcher.dispatch(MenuAction::DocumentClick(target));
                })
            });

            move || drop(listener)
        });
    }

    let on_trigger_click = {
        let dispatcher = state.dispatcher();
        let trigger_ref = trigger_ref.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();

            let Some(trigger) = trigger_ref.cast::<Element>() else {
                return;
            };
            let rect = trigger.get_bounding_client_rect();
            let scroll_y = web_sys::window()
                .and_then(|window| window.scroll_y().ok())
                .unwrap_or(0.0);

            dispatcher.dispatch(MenuAction::Toggle(
                TriggerRect {
                    left: rect.left(),
                    bottom: rect.bottom(),
                },
                scroll_y,
            ));
        })
    };

    let close = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(MenuAction::Close))
    };

    UseDropdownResult {
        menu: state.menu,
        trigger_ref,
        menu_ref,
        on_trigger_click,
        close,
    }
}
