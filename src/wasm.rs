//! Browser bindings. The view layer owns rendering and key handling; this
//! facade owns one `Session` and forwards everything through it. Deferred
//! command results come back through a JS callback once their timer fires.

use crate::fs::FsError;
use crate::session::{Session, Submission};
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
pub struct CommandResponse {
    pub success: bool,
    pub pending: bool,
}

fn to_js<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}

fn fs_err(e: FsError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
pub struct Terminal {
    session: Rc<RefCell<Session>>,
    on_result: Rc<RefCell<Option<js_sys::Function>>>,
}

#[wasm_bindgen]
impl Terminal {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Terminal {
        Terminal {
            session: Rc::new(RefCell::new(Session::new())),
            on_result: Rc::new(RefCell::new(None)),
        }
    }

    /// Register the callback invoked when a deferred command's output lands;
    /// the frontend re-reads the scrollback when it fires.
    pub fn set_result_callback(&mut self, callback: js_sys::Function) {
        *self.on_result.borrow_mut() = Some(callback);
    }

    pub fn run_command(&mut self, line: &str) -> JsValue {
        let submission = self.session.borrow_mut().submit(line);
        match submission {
            Submission::Done => to_js(&CommandResponse { success: true, pending: false }),
            Submission::Busy => to_js(&CommandResponse { success: false, pending: false }),
            Submission::Pending(pending) => {
                let session = Rc::clone(&self.session);
                let on_result = Rc::clone(&self.on_result);
                let delay_ms = pending.delay.as_millis() as u32;
                wasm_bindgen_futures::spawn_local(async move {
                    TimeoutFuture::new(delay_ms).await;
                    // a stale epoch makes this a no-op after Ctrl+C
                    session.borrow_mut().deliver(pending);
                    if let Some(cb) = on_result.borrow().as_ref() {
                        if cb.call0(&JsValue::NULL).is_err() {
                            web_sys::console::warn_1(
                                &"[codebench] result callback threw".into(),
                            );
                        }
                    }
                });
                to_js(&CommandResponse { success: true, pending: true })
            }
        }
    }

    pub fn cancel(&mut self) {
        self.session.borrow_mut().cancel();
    }

    pub fn recall_prev(&mut self) -> Option<String> {
        self.session.borrow_mut().recall_prev()
    }

    pub fn recall_next(&mut self) -> Option<String> {
        self.session.borrow_mut().recall_next()
    }

    pub fn scrollback(&self) -> JsValue {
        to_js(&self.session.borrow().scrollback())
    }

    pub fn prompt(&self) -> String {
        self.session.borrow().prompt()
    }

    pub fn is_processing(&self) -> bool {
        self.session.borrow().is_processing()
    }

    pub fn current_path(&self) -> String {
        self.session.borrow().cwd().to_string()
    }

    // the explorer and editor surface talk straight to the store

    pub fn tree_snapshot(&self) -> JsValue {
        to_js(&self.session.borrow().store().snapshot())
    }

    pub fn tree_revision(&self) -> u64 {
        self.session.borrow().store().revision()
    }

    pub fn create_file(&mut self, parent_path: &str, name: &str) -> Result<(), JsValue> {
        self.session
            .borrow_mut()
            .store_mut()
            .create_file(parent_path, name)
            .map(|_| ())
            .map_err(fs_err)
    }

    pub fn create_folder(&mut self, parent_path: &str, name: &str) -> Result<(), JsValue> {
        self.session
            .borrow_mut()
            .store_mut()
            .create_folder(parent_path, name)
            .map(|_| ())
            .map_err(fs_err)
    }

    pub fn delete_item(&mut self, path: &str) -> Result<(), JsValue> {
        self.session.borrow_mut().store_mut().delete(path).map_err(fs_err)
    }

    pub fn rename_item(&mut self, path: &str, new_name: &str) -> Result<(), JsValue> {
        self.session
            .borrow_mut()
            .store_mut()
            .rename(path, new_name)
            .map_err(fs_err)
    }

    pub fn update_file_content(&mut self, path: &str, content: &str) {
        self.session
            .borrow_mut()
            .store_mut()
            .update_file_content(path, content);
    }

    pub fn read_file(&self, path: &str) -> Result<String, JsValue> {
        self.session
            .borrow()
            .store()
            .read_file(path)
            .map(|s| s.to_string())
            .map_err(fs_err)
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}
