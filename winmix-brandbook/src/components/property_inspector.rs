//! The property panel bound to the selected element
//!
//! Every field writes through [`ElementInspector`] as it changes, so the page
//! underneath shows each edit on the next frame. The prompt draft and the
//! code-mode class list are the only local buffers.

use brandbook_components::{
    OverlayStyle, Slider, SliderProps, TextInput, TextInputProps, docked_rect, render_overlay,
};
use brandbook_core::{Component, EventKind, Keybindings};
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::action::Action;
use crate::components::help_bar::hint_line;
use crate::components::styled::{CYAN, LIME, PANEL_BG};
use crate::element::EditableElementRef;
use crate::inspector::ElementInspector;
use crate::keymap::{self, Command, KeyContext};
use crate::state::BrandBookState;
use crate::style::{CssProperty, CustomStyleRecord, StyleValue};
use crate::transform::{TransformProperty, leading_number};

pub const PANEL_WIDTH: u16 = 46;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InspectorMode {
    #[default]
    Edit,
    Prompt,
    Code,
}

impl InspectorMode {
    pub const ALL: [InspectorMode; 3] = [InspectorMode::Edit, InspectorMode::Prompt, InspectorMode::Code];

    pub fn label(self) -> &'static str {
        match self {
            InspectorMode::Edit => "EDIT",
            InspectorMode::Prompt => "PROMPT",
            InspectorMode::Code => "CODE",
        }
    }

    pub fn next(self) -> Self {
        match self {
            InspectorMode::Edit => InspectorMode::Prompt,
            InspectorMode::Prompt => InspectorMode::Code,
            InspectorMode::Code => InspectorMode::Edit,
        }
    }
}

struct SliderSpec {
    label: &'static str,
    property: TransformProperty,
    min: i32,
    max: i32,
    unit: &'static str,
    default: i32,
    /// Shown instead of the number at 0
    zero_label: Option<&'static str>,
}

const fn slider(
    label: &'static str,
    property: TransformProperty,
    min: i32,
    max: i32,
    unit: &'static str,
    default: i32,
) -> SliderSpec {
    SliderSpec {
        label,
        property,
        min,
        max,
        unit,
        default,
        zero_label: None,
    }
}

static TRANSFORM_SLIDERS: [SliderSpec; 12] = [
    slider("Translate X", TransformProperty::TranslateX, -200, 200, "px", 0),
    slider("Translate Y", TransformProperty::TranslateY, -200, 200, "px", 0),
    slider("Skew X", TransformProperty::SkewX, -45, 45, "°", 0),
    slider("Skew Y", TransformProperty::SkewY, -45, 45, "°", 0),
    slider("Rotate", TransformProperty::Rotate, -180, 180, "°", 0),
    slider("Scale", TransformProperty::Scale, 0, 200, "%", 100),
    slider("Scale X", TransformProperty::ScaleX, 0, 200, "%", 100),
    slider("Scale Y", TransformProperty::ScaleY, 0, 200, "%", 100),
    slider("Rotate X", TransformProperty::RotateX, -180, 180, "°", 0),
    slider("Rotate Y", TransformProperty::RotateY, -180, 180, "°", 0),
    slider("Rotate Z", TransformProperty::RotateZ, -180, 180, "°", 0),
    SliderSpec {
        zero_label: Some("Default"),
        ..slider("Perspective", TransformProperty::Perspective, 0, 6, "", 0)
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Control {
    Content,
    Classes,
    Opacity,
    Transform(usize),
}

/// What a child widget reports back; turned into style writes here
#[derive(Clone, Debug, PartialEq)]
enum FieldEdit {
    Text(String),
    Submit(String),
    Number(i32),
}

enum Row {
    Field(Control),
    Heading(&'static str),
    Note(&'static str),
    Gap,
}

impl Row {
    fn height(&self) -> u16 {
        match self {
            Row::Field(Control::Content | Control::Classes) => 3,
            _ => 1,
        }
    }
}

pub struct PropertyInspectorProps<'a> {
    pub state: &'a BrandBookState,
    pub keybindings: &'a Keybindings<KeyContext>,
}

/// The selected element with its stored edits
struct Target<'s> {
    inspector: ElementInspector<'s>,
    element: &'s EditableElementRef,
    record: &'s CustomStyleRecord,
}

impl Target<'_> {
    /// Property names are fixed by the panel, so only an empty element id
    /// can be rejected; the facade logs that case
    fn write(&self, property: &str, value: impl Into<StyleValue>) -> Option<Action> {
        self.inspector
            .handle_style_change(&self.element.id, property, value)
            .ok()
    }
}

#[derive(Default)]
pub struct PropertyInspector {
    /// Element the local state belongs to
    bound_id: Option<String>,
    mode: InspectorMode,
    /// Index into the edit-mode controls
    focus: usize,
    scroll: u16,
    content_input: TextInput,
    classes_input: TextInput,
    prompt_input: TextInput,
    code_input: TextInput,
    prompt_draft: String,
    code_buffer: String,
    opacity: Slider,
    transforms: [Slider; 12],
    panel: Rect,
    close_area: Rect,
    mode_areas: Vec<(Rect, InspectorMode)>,
    control_areas: Vec<(Rect, Control)>,
}

fn classes_value(element: &EditableElementRef, record: &CustomStyleRecord) -> String {
    record
        .classes
        .clone()
        .unwrap_or_else(|| element.base_classes.clone())
}

fn content_value(element: &EditableElementRef, record: &CustomStyleRecord) -> String {
    record
        .content
        .clone()
        .or_else(|| element.content.clone())
        .unwrap_or_default()
}

fn text_props<'a>(
    value: &'a str,
    title: &'a str,
    placeholder: &'a str,
    is_focused: bool,
) -> TextInputProps<'a, FieldEdit> {
    TextInputProps {
        value,
        placeholder,
        title: Some(title),
        is_focused,
        show_border: true,
        bg_color: Some(PANEL_BG),
        on_change: FieldEdit::Text,
        on_submit: FieldEdit::Submit,
    }
}

fn opacity_props(record: &CustomStyleRecord, is_focused: bool) -> SliderProps<'static, FieldEdit> {
    let value = record
        .style()
        .get(CssProperty::Opacity)
        .and_then(StyleValue::as_number)
        .map_or(100, |o| (o * 100.0).round() as i32);
    SliderProps {
        label: "Opacity",
        value: value.clamp(0, 100),
        min: 0,
        max: 100,
        unit: "%",
        value_label: None,
        is_focused,
        on_change: FieldEdit::Number,
    }
}

fn transform_props(
    spec: &'static SliderSpec,
    record: &CustomStyleRecord,
    is_focused: bool,
) -> SliderProps<'static, FieldEdit> {
    let value = record
        .transform_value(spec.property)
        .and_then(leading_number)
        .map_or(spec.default, |n| n.round() as i32)
        .clamp(spec.min, spec.max);
    SliderProps {
        label: spec.label,
        value,
        min: spec.min,
        max: spec.max,
        unit: spec.unit,
        value_label: spec.zero_label.filter(|_| value == 0),
        is_focused,
        on_change: FieldEdit::Number,
    }
}

impl PropertyInspector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> InspectorMode {
        self.mode
    }

    /// Whether `pos` fell on the panel in the last frame
    pub fn contains(&self, pos: Position) -> bool {
        self.panel.contains(pos)
    }

    /// Reset local state when the selection moves to another element
    fn bind(&mut self, element: &EditableElementRef, record: &CustomStyleRecord) {
        if self.bound_id.as_deref() == Some(element.id.as_str()) {
            return;
        }
        tracing::debug!(element_id = %element.id, "inspector bound");
        self.bound_id = Some(element.id.clone());
        self.mode = InspectorMode::Edit;
        self.focus = 0;
        self.scroll = 0;
        self.prompt_draft.clear();
        self.prompt_input = TextInput::new();
        self.code_buffer = classes_value(element, record);
        self.code_input.move_to_end(&self.code_buffer);
        self.content_input.move_to_end(&content_value(element, record));
        self.classes_input.move_to_end(&classes_value(element, record));
    }

    fn set_mode(&mut self, mode: InspectorMode, target: &Target<'_>) {
        if mode == InspectorMode::Code && self.mode != InspectorMode::Code {
            self.code_buffer = classes_value(target.element, target.record);
            self.code_input.move_to_end(&self.code_buffer);
        }
        self.mode = mode;
    }

    fn controls(&self, element: &EditableElementRef) -> Vec<Control> {
        if self.mode != InspectorMode::Edit {
            return Vec::new();
        }
        let mut controls = Vec::with_capacity(TRANSFORM_SLIDERS.len() + 3);
        if element.content.is_some() {
            controls.push(Control::Content);
        }
        controls.extend([Control::Classes, Control::Opacity]);
        controls.extend((0..TRANSFORM_SLIDERS.len()).map(Control::Transform));
        controls
    }

    fn focused(&self, element: &EditableElementRef) -> Option<Control> {
        self.controls(element).get(self.focus).copied()
    }

    fn move_focus(&mut self, forward: bool, element: &EditableElementRef) {
        let count = self.controls(element).len();
        if count == 0 {
            return;
        }
        self.focus = if forward {
            (self.focus + 1) % count
        } else {
            (self.focus + count - 1) % count
        };
    }

    fn focus_control(&mut self, control: Control, element: &EditableElementRef) {
        if let Some(index) = self.controls(element).iter().position(|c| *c == control) {
            self.focus = index;
        }
    }

    fn handle_key(
        &mut self,
        key: KeyEvent,
        target: &Target<'_>,
        keybindings: &Keybindings<KeyContext>,
    ) -> Vec<Action> {
        let edit_mode = self.mode == InspectorMode::Edit;
        match keymap::resolve(keybindings, key, KeyContext::Inspector) {
            Some(Command::InspectorClose | Command::Undo) => {
                return target.inspector.handle_key(key, keybindings).into_iter().collect();
            }
            Some(Command::ModeEdit) => self.set_mode(InspectorMode::Edit, target),
            Some(Command::ModePrompt) => self.set_mode(InspectorMode::Prompt, target),
            Some(Command::ModeCode) => self.set_mode(InspectorMode::Code, target),
            Some(Command::ModeCycle) => self.set_mode(self.mode.next(), target),
            Some(Command::ControlNext) if edit_mode => self.move_focus(true, target.element),
            Some(Command::ControlPrev) if edit_mode => self.move_focus(false, target.element),
            Some(Command::ResetClasses) if self.mode == InspectorMode::Code => {
                self.code_buffer = target.element.base_classes.clone();
                self.code_input.move_to_end(&self.code_buffer);
            }
            Some(Command::Apply) => return self.apply(target),
            _ => {
                let event = EventKind::Key(key);
                return match self.mode {
                    InspectorMode::Edit => match self.focused(target.element) {
                        Some(control) => self.control_event(control, &event, target, true),
                        None => Vec::new(),
                    },
                    InspectorMode::Prompt => self.prompt_event(&event, target),
                    InspectorMode::Code => self.code_event(&event, target),
                };
            }
        }
        Vec::new()
    }

    /// Prompt: note a non-blank draft. Code: write the buffer.
    fn apply(&mut self, target: &Target<'_>) -> Vec<Action> {
        match self.mode {
            InspectorMode::Edit => Vec::new(),
            InspectorMode::Prompt => {
                if self.prompt_draft.trim().is_empty() {
                    return Vec::new();
                }
                vec![Action::InspectorPromptApply {
                    element_id: target.element.id.clone(),
                    prompt: self.prompt_draft.clone(),
                }]
            }
            InspectorMode::Code => target
                .write("classes", self.code_buffer.clone())
                .into_iter()
                .collect(),
        }
    }

    fn control_event(
        &mut self,
        control: Control,
        event: &EventKind,
        target: &Target<'_>,
        is_focused: bool,
    ) -> Vec<Action> {
        match control {
            Control::Content | Control::Classes => {
                let (input, property, value) = if control == Control::Content {
                    (&mut self.content_input, "content", content_value(target.element, target.record))
                } else {
                    (&mut self.classes_input, "classes", classes_value(target.element, target.record))
                };
                Component::<FieldEdit>::handle_event(input, event, text_props(&value, "", "", is_focused))
                    .into_iter()
                    .filter_map(|edit| match edit {
                        FieldEdit::Text(text) => target.write(property, text),
                        _ => None,
                    })
                    .collect()
            }
            Control::Opacity => {
                let props = opacity_props(target.record, is_focused);
                Component::<FieldEdit>::handle_event(&mut self.opacity, event, props)
                    .into_iter()
                    .filter_map(|edit| match edit {
                        FieldEdit::Number(n) => target.write("opacity", f64::from(n) / 100.0),
                        _ => None,
                    })
                    .collect()
            }
            Control::Transform(index) => {
                let (Some(spec), Some(slider)) =
                    (TRANSFORM_SLIDERS.get(index), self.transforms.get_mut(index))
                else {
                    return Vec::new();
                };
                let props = transform_props(spec, target.record, is_focused);
                Component::<FieldEdit>::handle_event(slider, event, props)
                    .into_iter()
                    .filter_map(|edit| match edit {
                        FieldEdit::Number(n) => {
                            target.write(spec.property.name(), format!("{}{}", n, spec.unit))
                        }
                        _ => None,
                    })
                    .collect()
            }
        }
    }

    fn prompt_event(&mut self, event: &EventKind, target: &Target<'_>) -> Vec<Action> {
        let props = text_props(&self.prompt_draft, "", "", true);
        let edits: Vec<FieldEdit> = Component::<FieldEdit>::handle_event(&mut self.prompt_input, event, props)
            .into_iter()
            .collect();

        let mut actions = Vec::new();
        for edit in edits {
            match edit {
                FieldEdit::Text(text) => self.prompt_draft = text,
                FieldEdit::Submit(_) => actions.extend(self.apply(target)),
                FieldEdit::Number(_) => {}
            }
        }
        actions
    }

    fn code_event(&mut self, event: &EventKind, target: &Target<'_>) -> Vec<Action> {
        let props = text_props(&self.code_buffer, "", "", true);
        let edits: Vec<FieldEdit> = Component::<FieldEdit>::handle_event(&mut self.code_input, event, props)
            .into_iter()
            .collect();

        let mut actions = Vec::new();
        for edit in edits {
            match edit {
                FieldEdit::Text(text) => {
                    self.code_buffer = text.clone();
                    actions.extend(target.write("classes", text));
                }
                FieldEdit::Submit(_) => actions.extend(self.apply(target)),
                FieldEdit::Number(_) => {}
            }
        }
        actions
    }

    fn handle_mouse(&mut self, event: &EventKind, target: &Target<'_>) -> Vec<Action> {
        if event.is_left_click_in(self.close_area) {
            return vec![target.inspector.close_inspector()];
        }
        let clicked_mode = self
            .mode_areas
            .iter()
            .find(|(area, _)| event.is_left_click_in(*area))
            .map(|(_, mode)| *mode);
        if let Some(mode) = clicked_mode {
            self.set_mode(mode, target);
            return Vec::new();
        }
        if self.mode != InspectorMode::Edit {
            return Vec::new();
        }

        // Sliders hit-test their own gauges; only those drawn last frame
        let drawn: Vec<Control> = self.control_areas.iter().map(|(_, c)| *c).collect();
        for control in drawn {
            if !matches!(control, Control::Opacity | Control::Transform(_)) {
                continue;
            }
            let actions = self.control_event(control, event, target, false);
            if !actions.is_empty() {
                self.focus_control(control, target.element);
                return actions;
            }
        }

        let clicked = self
            .control_areas
            .iter()
            .find(|(area, _)| event.is_left_click_in(*area))
            .map(|(_, control)| *control);
        if let Some(control) = clicked {
            self.focus_control(control, target.element);
        }
        Vec::new()
    }

    fn edit_rows(&self, element: &EditableElementRef) -> Vec<Row> {
        let mut rows = Vec::new();
        if element.content.is_some() {
            rows.push(Row::Field(Control::Content));
        }
        rows.extend([
            Row::Field(Control::Classes),
            Row::Gap,
            Row::Heading("Appearance"),
            Row::Field(Control::Opacity),
            Row::Gap,
            Row::Heading("Transform"),
        ]);
        rows.extend((0..TRANSFORM_SLIDERS.len()).map(|i| Row::Field(Control::Transform(i))));
        rows.extend([
            Row::Gap,
            Row::Heading("Layout & Typography"),
            Row::Note("Margin · Padding · Size · Typography · Background"),
        ]);
        rows
    }

    fn render_edit(&mut self, frame: &mut Frame, body: Rect, target: &Target<'_>) {
        let rows = self.edit_rows(target.element);
        let focused = self.focused(target.element);

        let mut tops = Vec::with_capacity(rows.len());
        let mut total = 0u16;
        for row in &rows {
            tops.push(total);
            total += row.height();
        }

        let focused_row = rows
            .iter()
            .zip(&tops)
            .find(|(row, _)| matches!(row, Row::Field(c) if Some(*c) == focused));
        if let Some((row, &top)) = focused_row {
            if top < self.scroll {
                self.scroll = top;
            } else if top + row.height() > self.scroll + body.height {
                self.scroll = (top + row.height()).saturating_sub(body.height);
            }
        }
        self.scroll = self.scroll.min(total.saturating_sub(body.height));

        for (row, &top) in rows.iter().zip(&tops) {
            let height = row.height();
            if top < self.scroll || top + height > self.scroll + body.height {
                continue;
            }
            let area = Rect::new(body.x, body.y + top - self.scroll, body.width, height);
            match row {
                Row::Field(control) => {
                    self.render_control(frame, area, *control, target, focused == Some(*control));
                    self.control_areas.push((area, *control));
                }
                Row::Heading(text) => frame.render_widget(
                    Paragraph::new(Span::styled(
                        *text,
                        Style::default().fg(LIME).add_modifier(Modifier::BOLD),
                    )),
                    area,
                ),
                Row::Note(text) => frame.render_widget(
                    Paragraph::new(Span::styled(*text, Style::default().fg(Color::DarkGray))),
                    area,
                ),
                Row::Gap => {}
            }
        }
    }

    fn render_control(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        control: Control,
        target: &Target<'_>,
        is_focused: bool,
    ) {
        match control {
            Control::Content => {
                let value = content_value(target.element, target.record);
                let props = text_props(&value, "Text Content", "Element text", is_focused);
                Component::<FieldEdit>::render(&mut self.content_input, frame, area, props);
            }
            Control::Classes => {
                let value = classes_value(target.element, target.record);
                let props = text_props(&value, "Tailwind Classes", "No classes", is_focused);
                Component::<FieldEdit>::render(&mut self.classes_input, frame, area, props);
            }
            Control::Opacity => {
                let props = opacity_props(target.record, is_focused);
                Component::<FieldEdit>::render(&mut self.opacity, frame, area, props);
            }
            Control::Transform(index) => {
                if let (Some(spec), Some(slider)) =
                    (TRANSFORM_SLIDERS.get(index), self.transforms.get_mut(index))
                {
                    let props = transform_props(spec, target.record, is_focused);
                    Component::<FieldEdit>::render(slider, frame, area, props);
                }
            }
        }
    }

    fn render_prompt(&mut self, frame: &mut Frame, body: Rect, target: &Target<'_>) {
        let [selected, classes, _, input, _, buttons, note] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(body);

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("Selected: ", Style::default().fg(Color::Gray)),
                Span::styled(
                    format!("{} #{}", target.element.kind.label().to_uppercase(), target.element.id),
                    Style::default().fg(CYAN),
                ),
            ])),
            selected,
        );

        let current = classes_value(target.element, target.record);
        let classes_line = if current.trim().is_empty() {
            Span::styled(
                "No classes",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )
        } else {
            Span::styled(current, Style::default().fg(Color::Gray))
        };
        frame.render_widget(Paragraph::new(classes_line), classes);

        let props = text_props(&self.prompt_draft, "Describe the change", "e.g. make it pop", true);
        Component::<FieldEdit>::render(&mut self.prompt_input, frame, input, props);

        let apply_style = if self.prompt_draft.trim().is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Black).bg(LIME)
        };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(" Apply Changes ", apply_style),
                Span::raw("  "),
                Span::styled("Cancel (^U)", Style::default().fg(Color::Gray)),
            ])),
            buttons,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Prompts are not sent anywhere yet.",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )),
            note,
        );
    }

    fn render_code(&mut self, frame: &mut Frame, body: Rect, target: &Target<'_>) {
        let [input, _, base, _, buttons] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(body);

        let props = text_props(&self.code_buffer, "Classes", "No classes", true);
        Component::<FieldEdit>::render(&mut self.code_input, frame, input, props);

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("Base: ", Style::default().fg(Color::Gray)),
                Span::styled(
                    target.element.base_classes.as_str(),
                    Style::default().fg(Color::DarkGray),
                ),
            ])),
            base,
        );
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(" Apply ", Style::default().fg(Color::Black).bg(LIME)),
                Span::raw("  "),
                Span::styled("Reset (^R)", Style::default().fg(Color::Gray)),
            ])),
            buttons,
        );
    }
}

impl Component<Action> for PropertyInspector {
    type Props<'a> = PropertyInspectorProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        let Some(element) = props.state.selected_element.as_ref() else {
            return Vec::new();
        };
        let inspector = ElementInspector::new(props.state);
        let record = inspector.get_element_style(&element.id);
        self.bind(element, &record);
        let target = Target {
            inspector,
            element,
            record: &record,
        };

        match event {
            EventKind::Key(key) => self.handle_key(*key, &target, props.keybindings),
            EventKind::Mouse(_) => self.handle_mouse(event, &target),
            EventKind::Scroll { delta, .. } if self.mode == InspectorMode::Edit => {
                self.move_focus(*delta > 0, element);
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.panel = Rect::default();
        self.close_area = Rect::default();
        self.mode_areas.clear();
        self.control_areas.clear();

        let Some(element) = props.state.selected_element.as_ref() else {
            return;
        };
        let inspector = ElementInspector::new(props.state);
        let record = inspector.get_element_style(&element.id);
        self.bind(element, &record);
        let target = Target {
            inspector,
            element,
            record: &record,
        };

        let panel = docked_rect(PANEL_WIDTH, area);
        self.panel = panel;
        render_overlay(frame, panel, &OverlayStyle::floating(PANEL_BG));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(LIME))
            .title(Span::styled(
                " Inspector ",
                Style::default().fg(LIME).add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(panel);
        frame.render_widget(block, panel);
        if inner.width < 12 || inner.height < 5 {
            return;
        }

        let [header, modes, _, body, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(
                    element.kind.label().to_uppercase(),
                    Style::default().fg(CYAN).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(" #{}", element.id), Style::default().fg(Color::Gray)),
            ])),
            header,
        );
        self.close_area = Rect::new(header.right().saturating_sub(3), header.y, 3, 1);
        frame.render_widget(
            Paragraph::new(Span::styled("[x]", Style::default().fg(Color::Red))),
            self.close_area,
        );

        let mut spans = Vec::new();
        let mut x = modes.x;
        for mode in InspectorMode::ALL {
            let label = format!(" {} ", mode.label());
            let width = label.chars().count() as u16;
            let style = if mode == self.mode {
                Style::default()
                    .fg(Color::Black)
                    .bg(LIME)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            self.mode_areas.push((Rect::new(x, modes.y, width, 1), mode));
            spans.push(Span::styled(label, style));
            spans.push(Span::styled("|", Style::default().fg(Color::DarkGray)));
            x = x.saturating_add(width + 1);
        }
        spans.pop();
        frame.render_widget(Paragraph::new(Line::from(spans)), modes);

        match self.mode {
            InspectorMode::Edit => self.render_edit(frame, body, &target),
            InspectorMode::Prompt => self.render_prompt(frame, body, &target),
            InspectorMode::Code => self.render_code(frame, body, &target),
        }

        let hints = hint_line(
            props.keybindings,
            KeyContext::Inspector,
            &[(Command::ModeCycle, "mode"), (Command::InspectorClose, "close")],
        );
        frame.render_widget(Paragraph::new(hints), footer);
    }
}
