use web_sys::window;

/// `window.confirm`; false si no hay ventana
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn print_page() {
    if let Some(win) = window() {
        if let Err(e) = win.print() {
            log::warn!("⚠️ No se pudo abrir el diálogo de impresión: {:?}", e);
        }
    }
}

pub fn scroll_to_top() {
    if let Some(win) = window() {
        win.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

pub fn reload_page() {
    if let Some(win) = window() {
        if let Err(e) = win.location().reload() {
            log::warn!("⚠️ No se pudo recargar la página: {:?}", e);
        }
    }
}
