// src/ui/window.rs

use crate::state::{AppState, SearchOutcome};
use gtk4::prelude::*;
use gtk4::{
    glib, Application, ApplicationWindow, Box as GtkBox, Button, ButtonsType, Entry, Label,
    MessageDialog, MessageType, Orientation, ScrolledWindow, TextView, WrapMode,
};
use std::rc::Rc;

const APP_ID: &str = "org.chemassist.ChemAssist";

/// Runs the desktop form until the window is closed.
pub fn run(state: AppState) -> glib::ExitCode {
    let app = Application::builder().application_id(APP_ID).build();

    let state = Rc::new(state);
    app.connect_activate(move |app| build_ui(app, state.clone()));
    app.run()
}

fn build_ui(app: &Application, state: Rc<AppState>) {
    let window = ApplicationWindow::builder()
        .application(app)
        .title("🧪 Offline Chemistry Assistant")
        .default_width(600)
        .default_height(500)
        .build();

    let root_vbox = GtkBox::new(Orientation::Vertical, 5);
    root_vbox.set_margin_top(10);
    root_vbox.set_margin_bottom(10);
    root_vbox.set_margin_start(10);
    root_vbox.set_margin_end(10);

    let title = Label::new(Some("Enter Element Name:"));
    let entry = Entry::builder().width_chars(30).build();
    entry.set_halign(gtk4::Align::Center);
    let search_btn = Button::with_label("Search");
    search_btn.set_halign(gtk4::Align::Center);

    // Result box
    let result_view = TextView::builder()
        .editable(false).cursor_visible(false).monospace(true).wrap_mode(WrapMode::Word)
        .left_margin(10).right_margin(10).top_margin(10).bottom_margin(10)
        .build();
    let scroll_win = ScrolledWindow::builder()
        .vexpand(true)
        .child(&result_view)
        .build();

    root_vbox.append(&title);
    root_vbox.append(&entry);
    root_vbox.append(&search_btn);
    root_vbox.append(&scroll_win);
    window.set_child(Some(&root_vbox));

    let on_search = {
        let window = window.clone();
        let entry = entry.clone();
        let result_view = result_view.clone();
        move || {
            let outcome = state.search(&entry.text());
            if outcome == SearchOutcome::EmptyInput {
                show_warning(&window, "Empty Input", outcome.text());
                return;
            }
            result_view.buffer().set_text(outcome.text());
        }
    };

    let s = on_search.clone();
    search_btn.connect_clicked(move |_| s());
    entry.connect_activate(move |_| on_search());

    window.present();
}

fn show_warning(parent: &ApplicationWindow, title: &str, message: &str) {
    let dialog = MessageDialog::builder()
        .transient_for(parent)
        .modal(true)
        .message_type(MessageType::Warning)
        .buttons(ButtonsType::Ok)
        .text(title)
        .secondary_text(message)
        .build();
    dialog.connect_response(|d, _| d.close());
    dialog.present();
}
