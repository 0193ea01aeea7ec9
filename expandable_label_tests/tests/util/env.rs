// Copyright 2025 the Expandable Label Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use expandable_label::{
    ExpandableLabel, Font, LabelObserver, LineLayout, MonospaceLayout, Point, StyledText,
    Transition,
};

/// The font every test label is set in.
pub(crate) fn font() -> Font {
    Font::new(10.0).with_line_height(12.0)
}

/// Observer notifications, in the order they were received.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) enum Event {
    WillExpand,
    DidExpand,
    WillCollapse,
    DidCollapse,
}

#[derive(Default)]
struct Shared {
    events: RefCell<Vec<Event>>,
    veto: Cell<bool>,
}

struct Recorder(Rc<Shared>);

impl LabelObserver<MonospaceLayout> for Recorder {
    fn should_expand(&mut self, _: &ExpandableLabel<MonospaceLayout>) -> bool {
        !self.0.veto.get()
    }

    fn should_collapse(&mut self, _: &ExpandableLabel<MonospaceLayout>) -> bool {
        !self.0.veto.get()
    }

    fn will_expand(&mut self, _: &ExpandableLabel<MonospaceLayout>) {
        self.0.events.borrow_mut().push(Event::WillExpand);
    }

    fn did_expand(&mut self, _: &ExpandableLabel<MonospaceLayout>) {
        self.0.events.borrow_mut().push(Event::DidExpand);
    }

    fn will_collapse(&mut self, _: &ExpandableLabel<MonospaceLayout>) {
        self.0.events.borrow_mut().push(Event::WillCollapse);
    }

    fn did_collapse(&mut self, _: &ExpandableLabel<MonospaceLayout>) {
        self.0.events.borrow_mut().push(Event::DidCollapse);
    }
}

/// A label with a recording observer.
pub(crate) struct TestEnv {
    pub(crate) label: ExpandableLabel<MonospaceLayout>,
    shared: Rc<Shared>,
}

impl TestEnv {
    /// A 100px wide label showing `text`.
    pub(crate) fn new(text: &str) -> Self {
        Self::with_width(text, 100.0)
    }

    pub(crate) fn with_width(text: &str, width: f32) -> Self {
        let shared = Rc::new(Shared::default());
        let mut label = ExpandableLabel::new(MonospaceLayout::new(font()), font());
        label.set_observer(Some(Box::new(Recorder(shared.clone()))));
        label.set_text(text);
        label.set_width(width);
        Self { label, shared }
    }

    /// Presses and releases at `point`.
    pub(crate) fn tap(&mut self, point: Point) -> Option<Transition> {
        self.label.press(point);
        self.label.release(point)
    }

    /// Makes the observer refuse every transition.
    pub(crate) fn set_veto(&self, veto: bool) {
        self.shared.veto.set(veto);
    }

    pub(crate) fn events(&self) -> Vec<Event> {
        self.shared.events.borrow().clone()
    }

    /// The displayed text.
    pub(crate) fn displayed(&self) -> String {
        self.label.displayed_text().as_str().to_owned()
    }

    /// The displayed text, split into the lines it is drawn on.
    pub(crate) fn displayed_lines(&self) -> Vec<String> {
        let text: StyledText = self.label.displayed_text().into_owned();
        MonospaceLayout::new(font())
            .shape_lines(&text, self.label.width())
            .iter()
            .map(|line| text.as_str()[line.range()].to_owned())
            .collect()
    }
}
