use wasm_bindgen::prelude::*;
mod api;
mod error;
mod interop;

#[wasm_bindgen]
pub struct Session { pub(crate) state: recolor::State }

impl Session {
    pub fn rs_new(config: recolor::Config) -> Session { Session { state: recolor::State::new(config) } }
    pub fn rs_state(&self) -> &recolor::State { &self.state }

    pub(crate) fn transition(&mut self, f: impl FnOnce(recolor::State) -> recolor::State) {
        let prev = std::mem::take(&mut self.state);
        self.state = f(prev);
    }
}
