use egui::{Response, Ui, Visuals};

/// Toggle between the dark and light theme.
pub fn theme_switch(ui: &mut Ui, dark_theme: &mut bool) -> Response {
    let label = if *dark_theme {
        "Dark theme"
    } else {
        "Light theme"
    };
    let response = ui.toggle_value(dark_theme, label);
    if response.changed() {
        log::info!("Theme switched, dark: {dark_theme}");
    }
    response
}

pub fn visuals_for(dark_theme: bool) -> Visuals {
    if dark_theme {
        Visuals::dark()
    } else {
        Visuals::light()
    }
}
