// The control surface is web-only; native builds render no controller and an
// inert engine handle keeps the component tree compiling.
#[cfg(not(target_arch = "wasm32"))]
#[component]
pub fn VideoController() -> Element {
    rsx! {}
}
