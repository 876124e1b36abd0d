use crate::models::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Quit,
    PointerDown(Point),
    PointerUp(Point),
    PointerMoved(Point),
    SpawnKey,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    timestamp: Option<f64>,
    pointer: Option<Point>,
    events: Vec<InputEvent>,
}

impl FrameInput {
    pub fn new() -> FrameInput {
        Default::default()
    }

    impl_getter!(timestamp() -> Option<f64>);
    impl_getter!(pointer() -> Option<Point>);
    impl_getter!(events() -> &Vec<InputEvent>);

    impl_setter!(set_timestamp(timestamp: Option<f64>));
    impl_setter!(set_pointer(pointer: Option<Point>));

    pub fn add_event(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    pub fn with_event(mut self, event: InputEvent) -> FrameInput {
        self.add_event(event);
        self
    }

    pub fn with_pointer(mut self, pointer: Point) -> FrameInput {
        self.pointer = Some(pointer);
        self
    }

    pub fn with_timestamp(mut self, timestamp: f64) -> FrameInput {
        self.timestamp = Some(timestamp);
        self
    }
}
