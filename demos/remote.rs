use remote::{Command, Invoker};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

/// A device that can be switched on and off.
struct Device {
    name: String,
    on: bool,
}

impl Device {
    fn new(name: &str) -> Rc<RefCell<Device>> {
        Rc::new(RefCell::new(Device {
            name: name.to_string(),
            on: false,
        }))
    }

    fn set_power(&mut self, on: bool) {
        self.on = on;
        let state = if on { "on" } else { "off" };
        println!("Turning {state} {}", self.name);
    }
}

/// Switches a device on or off, and back again when inverted.
struct Power {
    device: Rc<RefCell<Device>>,
    on: bool,
}

impl Power {
    fn new(device: &Rc<RefCell<Device>>, on: bool) -> Power {
        Power {
            device: device.clone(),
            on,
        }
    }
}

impl Command for Power {
    fn apply(&mut self) {
        self.device.borrow_mut().set_power(self.on);
    }

    fn invert(&mut self) {
        self.device.borrow_mut().set_power(!self.on);
    }
}

impl fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let state = if self.on { "on" } else { "off" };
        write!(f, "turn {state} {}", self.device.borrow().name)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let tv = Device::new("Samsung TV");
    let ac = Device::new("Onida AC");

    let mut remote: Invoker<Power> = [
        Power::new(&tv, true),
        Power::new(&tv, false),
        Power::new(&ac, true),
        Power::new(&ac, false),
    ]
    .into_iter()
    .collect();

    let presses = [
        Press::Button(0),
        Press::Button(1),
        Press::Undo,
        Press::Button(2),
        Press::Button(3),
        Press::Undo,
        Press::Button(7),
        Press::Undo,
        Press::Undo,
        Press::Undo,
    ];
    for press in presses {
        let result = match press {
            Press::Button(slot) => remote.execute(slot),
            Press::Undo => remote.undo(),
        };
        if let Err(err) = result {
            println!("{err}");
        }
    }

    println!();
    println!("TV on: {}, AC on: {}", tv.borrow().on, ac.borrow().on);
    println!("{}", remote.display());
}

enum Press {
    Button(usize),
    Undo,
}
