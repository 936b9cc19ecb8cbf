// Scripted console and fake transport shared by the scenario tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::io;
use std::rc::Rc;
use std::thread;
use std::time::Duration;

use serde_json::{json, Value};
use talkium_cli::api::{RawResponse, Transport};
use talkium_cli::error::ApiError;
use talkium_cli::ui::Console;

/// Everything observable that happened, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Read(String),
    Ask(String),
    Out(String),
    Err(String),
    Clear,
    Request(String),
    Response(String),
}

pub type EventLog = Rc<RefCell<Vec<Event>>>;

pub fn log() -> EventLog {
    Rc::new(RefCell::new(Vec::new()))
}

pub struct ScriptedConsole {
    lines: VecDeque<Vec<u8>>,
    texts: VecDeque<String>,
    passwords: VecDeque<String>,
    events: EventLog,
}

impl ScriptedConsole {
    pub fn new(events: &EventLog) -> Self {
        ScriptedConsole {
            lines: VecDeque::new(),
            texts: VecDeque::new(),
            passwords: VecDeque::new(),
            events: Rc::clone(events),
        }
    }

    pub fn lines(mut self, lines: &[&str]) -> Self {
        self.lines.extend(lines.iter().map(|l| l.as_bytes().to_vec()));
        self
    }

    /// Queue a line exactly as the terminal would deliver it.
    pub fn raw_line(mut self, bytes: &[u8]) -> Self {
        self.lines.push_back(bytes.to_vec());
        self
    }

    pub fn username(mut self, name: &str) -> Self {
        self.texts.push_back(name.to_string());
        self
    }

    pub fn password(mut self, secret: &str) -> Self {
        self.passwords.push_back(secret.to_string());
        self
    }

    fn push(&self, event: Event) {
        self.events.borrow_mut().push(event);
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<Vec<u8>>> {
        self.push(Event::Read(prompt.to_string()));
        Ok(self.lines.pop_front())
    }

    fn read_text(&mut self, prompt: &str) -> io::Result<String> {
        self.push(Event::Ask(prompt.to_string()));
        self.texts
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no scripted text"))
    }

    fn read_password(&mut self, prompt: &str) -> io::Result<String> {
        self.push(Event::Ask(prompt.to_string()));
        self.passwords
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no scripted password"))
    }

    fn print(&mut self, line: &str) {
        self.push(Event::Out(line.to_string()));
    }

    fn error(&mut self, line: &str) {
        self.push(Event::Err(line.to_string()));
    }

    fn clear(&mut self) -> io::Result<()> {
        self.push(Event::Clear);
        Ok(())
    }
}

/// Serves canned responses per path, optionally after a delay.
pub struct FakeTransport {
    routes: HashMap<String, RawResponse>,
    delay: Duration,
    events: EventLog,
    bodies: Rc<RefCell<Vec<Value>>>,
}

impl FakeTransport {
    pub fn new(events: &EventLog) -> Self {
        FakeTransport {
            routes: HashMap::new(),
            delay: Duration::ZERO,
            events: Rc::clone(events),
            bodies: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn route(mut self, path: &str, status: u16, body: Value) -> Self {
        self.routes.insert(path.to_string(), RawResponse { status, body });
        self
    }

    pub fn ok(self, path: &str, message: Value) -> Self {
        self.route(path, 200, json!({ "status": 200, "message": message }))
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Handle on the JSON bodies sent with POST requests.
    pub fn posted(&self) -> Rc<RefCell<Vec<Value>>> {
        Rc::clone(&self.bodies)
    }

    fn answer(&self, path: &str) -> Result<RawResponse, ApiError> {
        self.events.borrow_mut().push(Event::Request(path.to_string()));
        thread::sleep(self.delay);
        let res = self.routes.get(path).cloned().ok_or_else(|| ApiError::Transport {
            path: path.to_string(),
            reason: "no route".into(),
        });
        self.events.borrow_mut().push(Event::Response(path.to_string()));
        res
    }
}

impl Transport for FakeTransport {
    fn get(&self, path: &str, bearer: Option<&str>) -> Result<RawResponse, ApiError> {
        if path == "/auth/user" && bearer != Some(TOKEN) {
            return Ok(RawResponse {
                status: 401,
                body: Value::Null,
            });
        }
        self.answer(path)
    }

    fn post_json(&self, path: &str, body: &Value) -> Result<RawResponse, ApiError> {
        self.bodies.borrow_mut().push(body.clone());
        self.answer(path)
    }
}

pub const TOKEN: &str = "eyJhbGciOiJIUzI1NiJ9.session.sig";

pub fn requests(events: &EventLog) -> Vec<String> {
    events
        .borrow()
        .iter()
        .filter_map(|e| match e {
            Event::Request(path) => Some(path.clone()),
            _ => None,
        })
        .collect()
}

pub fn output(events: &EventLog) -> Vec<String> {
    events
        .borrow()
        .iter()
        .filter_map(|e| match e {
            Event::Out(line) => Some(line.clone()),
            _ => None,
        })
        .collect()
}

pub fn errors(events: &EventLog) -> Vec<String> {
    events
        .borrow()
        .iter()
        .filter_map(|e| match e {
            Event::Err(line) => Some(line.clone()),
            _ => None,
        })
        .collect()
}
