//! The long-lived duplex channel to the game hub.
//!
//! One JSON text frame per message, decoded to [`ServerEvent`]. The
//! connection owns its JS callbacks: stopping it (or dropping the handle)
//! detaches and drops them, so a page that reconnects never stacks stale
//! handlers. An established connection retries on a fixed delay after a
//! drop; a handshake that never opens reports a [`Error::ConnectionFailure`]
//! once and stays down until the user rejoins.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::WebSocket;

use rpsls::protocol::{ClientCommand, ServerEvent};
use rpsls::Error;

const RECONNECT_DELAY_MS: i32 = 2_000;

/// Page-side callbacks. All run on the browser event loop.
pub(super) struct HubHandlers {
    pub(super) on_open: Box<dyn Fn()>,
    pub(super) on_event: Box<dyn Fn(ServerEvent)>,
    pub(super) on_handshake_error: Box<dyn Fn(Error)>,
}

struct Inner {
    url: String,
    socket: Option<WebSocket>,
    handlers: Rc<HubHandlers>,
    /// True once any open succeeded; gates reconnect vs. handshake-error.
    opened_once: bool,
    stopped: bool,
    on_open_cb: Option<Closure<dyn FnMut(web_sys::Event)>>,
    on_message_cb: Option<Closure<dyn FnMut(web_sys::MessageEvent)>>,
    on_error_cb: Option<Closure<dyn FnMut(web_sys::Event)>>,
    on_close_cb: Option<Closure<dyn FnMut(web_sys::CloseEvent)>>,
}

impl Inner {
    fn open(rc: &Rc<RefCell<Inner>>) -> Result<(), Error> {
        let url = rc.borrow().url.clone();
        let ws = WebSocket::new(&url)
            .map_err(|_| Error::ConnectionFailure(format!("failed to open {url}")))?;

        let weak = Rc::downgrade(rc);
        let on_open = Closure::wrap(Box::new(move |_ev: web_sys::Event| {
            let Some(rc) = weak.upgrade() else { return };
            let handlers = {
                let mut inner = rc.borrow_mut();
                inner.opened_once = true;
                Rc::clone(&inner.handlers)
            };
            (handlers.on_open)();
        }) as Box<dyn FnMut(web_sys::Event)>);
        ws.set_onopen(Some(on_open.as_ref().unchecked_ref()));

        let weak = Rc::downgrade(rc);
        let on_message = Closure::wrap(Box::new(move |ev: web_sys::MessageEvent| {
            let Some(rc) = weak.upgrade() else { return };
            let Some(text) = ev.data().as_string() else { return };
            match serde_json::from_str::<ServerEvent>(&text) {
                Ok(event) => {
                    let handlers = Rc::clone(&rc.borrow().handlers);
                    (handlers.on_event)(event);
                }
                Err(e) => log::debug!("hub: ignoring unrecognized frame: {e}"),
            }
        }) as Box<dyn FnMut(web_sys::MessageEvent)>);
        ws.set_onmessage(Some(on_message.as_ref().unchecked_ref()));

        let weak = Rc::downgrade(rc);
        let on_error = Closure::wrap(Box::new(move |_ev: web_sys::Event| {
            if weak.upgrade().is_some() {
                log::warn!("hub: socket error");
            }
        }) as Box<dyn FnMut(web_sys::Event)>);
        ws.set_onerror(Some(on_error.as_ref().unchecked_ref()));

        let weak = Rc::downgrade(rc);
        let on_close = Closure::wrap(Box::new(move |_ev: web_sys::CloseEvent| {
            if let Some(rc) = weak.upgrade() {
                Inner::handle_close(&rc);
            }
        }) as Box<dyn FnMut(web_sys::CloseEvent)>);
        ws.set_onclose(Some(on_close.as_ref().unchecked_ref()));

        let mut inner = rc.borrow_mut();
        inner.socket = Some(ws);
        inner.on_open_cb = Some(on_open);
        inner.on_message_cb = Some(on_message);
        inner.on_error_cb = Some(on_error);
        inner.on_close_cb = Some(on_close);
        Ok(())
    }

    fn handle_close(rc: &Rc<RefCell<Inner>>) {
        let (stopped, opened_once, handlers) = {
            let mut inner = rc.borrow_mut();
            inner.socket = None;
            (inner.stopped, inner.opened_once, Rc::clone(&inner.handlers))
        };
        if stopped {
            return;
        }
        if !opened_once {
            (handlers.on_handshake_error)(Error::ConnectionFailure(
                "handshake failed".to_string(),
            ));
            return;
        }

        log::warn!("hub: connection lost, retrying in {RECONNECT_DELAY_MS}ms");
        let weak = Rc::downgrade(rc);
        let retry = Closure::wrap(Box::new(move || {
            let Some(rc) = weak.upgrade() else { return };
            if rc.borrow().stopped {
                return;
            }
            if let Err(e) = Inner::open(&rc) {
                log::error!("hub: reconnect failed: {e}");
            }
        }) as Box<dyn FnMut()>);
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                retry.as_ref().unchecked_ref(),
                RECONNECT_DELAY_MS,
            );
        }
        // One-shot timer; it holds only a Weak and goes inert once the
        // connection is dropped.
        retry.forget();
    }
}

/// Handle owned by the page (in a thread-local slot; the socket is not
/// `Send`). Dropping it tears the channel down.
pub(super) struct HubConnection {
    inner: Rc<RefCell<Inner>>,
}

impl HubConnection {
    pub(super) fn connect(url: String, handlers: HubHandlers) -> Result<Self, Error> {
        let inner = Rc::new(RefCell::new(Inner {
            url,
            socket: None,
            handlers: Rc::new(handlers),
            opened_once: false,
            stopped: false,
            on_open_cb: None,
            on_message_cb: None,
            on_error_cb: None,
            on_close_cb: None,
        }));
        Inner::open(&inner)?;
        Ok(Self { inner })
    }

    pub(super) fn send(&self, command: &ClientCommand) -> Result<(), Error> {
        let json = serde_json::to_string(command)
            .map_err(|e| Error::ConnectionFailure(e.to_string()))?;
        let inner = self.inner.borrow();
        match &inner.socket {
            Some(ws) => ws
                .send_with_str(&json)
                .map_err(|_| Error::ConnectionFailure("send failed".to_string())),
            None => Err(Error::ConnectionFailure("not connected".to_string())),
        }
    }

    pub(super) fn stop(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.stopped = true;
        if let Some(ws) = inner.socket.take() {
            ws.set_onopen(None);
            ws.set_onmessage(None);
            ws.set_onerror(None);
            ws.set_onclose(None);
            let _ = ws.close();
        }
        inner.on_open_cb = None;
        inner.on_message_cb = None;
        inner.on_error_cb = None;
        inner.on_close_cb = None;
    }
}

impl Drop for HubConnection {
    fn drop(&mut self) {
        self.stop();
    }
}
