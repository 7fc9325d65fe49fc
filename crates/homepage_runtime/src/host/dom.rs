//! Direct DOM touches that sit outside the reactive view tree. No-ops off wasm.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use super::HostEffectError;

#[cfg(target_arch = "wasm32")]
fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

pub(super) fn set_body_class(
    class_name: &'static str,
    enabled: bool,
) -> Result<(), HostEffectError> {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(body) = document().and_then(|doc| doc.body()) else {
            return Ok(());
        };
        let classes = body.class_list();
        let result = if enabled {
            classes.add_1(class_name)
        } else {
            classes.remove_1(class_name)
        };
        result.map_err(|err| HostEffectError::BodyClass {
            class_name,
            reason: format!("{err:?}"),
        })
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (class_name, enabled);
        Ok(())
    }
}

pub(super) fn clear_input_value(element_id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(input) = document()
            .and_then(|doc| doc.get_element_by_id(element_id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
        {
            input.set_value("");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = element_id;
    }
}

pub(super) fn scroll_to_bottom(element_id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(element) = document().and_then(|doc| doc.get_element_by_id(element_id)) {
            element.set_scroll_top(element.scroll_height());
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = element_id;
    }
}
