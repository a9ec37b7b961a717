mod chart;
mod dom;
mod geocode;
mod leaflet;
mod log;
mod map;
mod plotly;
mod tabs;

fn main() {
    console_error_panic_hook::set_once();
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let page = document.clone();
    dom::on_ready(&document, move || {
        map::init_maps(&page);
        chart::init_charts(&page);
        chart::wire_refresh_buttons(&page);
        tabs::wire_tabs(&page);
    });
}
