//! CSR entry point: installs the panic hook and logger, then mounts the app.

#[cfg(target_arch = "wasm32")]
fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(koperasi_web::app::App);
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    // The UI only runs in the browser; build with trunk for the wasm32 target.
    eprintln!("koperasi-web is a browser application; build it with `trunk build`");
}
