//! Element-kind classification.
//!
//! Diagram element kinds form a closed vocabulary; the three category
//! sets (events, tasks, gateways) are derived from identifier suffixes,
//! computed once on first use and immutable afterwards. Which icon an
//! element gets is an upstream decision; this module only answers
//! category membership.

use std::sync::LazyLock;

use crate::log::debug;

/// The closed vocabulary of diagram element kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    // events
    StartEvent,
    EndEvent,
    IntermediateThrowEvent,
    IntermediateCatchEvent,
    BoundaryEvent,
    // tasks
    Task,
    UserTask,
    ServiceTask,
    ScriptTask,
    ManualTask,
    SendTask,
    ReceiveTask,
    BusinessRuleTask,
    // gateways
    ExclusiveGateway,
    ParallelGateway,
    InclusiveGateway,
    EventBasedGateway,
    ComplexGateway,
    // structural kinds that classify into no category
    CallActivity,
    SubProcess,
    SequenceFlow,
    MessageFlow,
    Pool,
    Lane,
    DataObject,
    DataStore,
    TextAnnotation,
}

impl ElementKind {
    /// Every kind in the vocabulary, in declaration order.
    pub const ALL: &'static [ElementKind] = &[
        ElementKind::StartEvent,
        ElementKind::EndEvent,
        ElementKind::IntermediateThrowEvent,
        ElementKind::IntermediateCatchEvent,
        ElementKind::BoundaryEvent,
        ElementKind::Task,
        ElementKind::UserTask,
        ElementKind::ServiceTask,
        ElementKind::ScriptTask,
        ElementKind::ManualTask,
        ElementKind::SendTask,
        ElementKind::ReceiveTask,
        ElementKind::BusinessRuleTask,
        ElementKind::ExclusiveGateway,
        ElementKind::ParallelGateway,
        ElementKind::InclusiveGateway,
        ElementKind::EventBasedGateway,
        ElementKind::ComplexGateway,
        ElementKind::CallActivity,
        ElementKind::SubProcess,
        ElementKind::SequenceFlow,
        ElementKind::MessageFlow,
        ElementKind::Pool,
        ElementKind::Lane,
        ElementKind::DataObject,
        ElementKind::DataStore,
        ElementKind::TextAnnotation,
    ];

    /// The kind's identifier.
    pub fn name(self) -> &'static str {
        match self {
            ElementKind::StartEvent => "StartEvent",
            ElementKind::EndEvent => "EndEvent",
            ElementKind::IntermediateThrowEvent => "IntermediateThrowEvent",
            ElementKind::IntermediateCatchEvent => "IntermediateCatchEvent",
            ElementKind::BoundaryEvent => "BoundaryEvent",
            ElementKind::Task => "Task",
            ElementKind::UserTask => "UserTask",
            ElementKind::ServiceTask => "ServiceTask",
            ElementKind::ScriptTask => "ScriptTask",
            ElementKind::ManualTask => "ManualTask",
            ElementKind::SendTask => "SendTask",
            ElementKind::ReceiveTask => "ReceiveTask",
            ElementKind::BusinessRuleTask => "BusinessRuleTask",
            ElementKind::ExclusiveGateway => "ExclusiveGateway",
            ElementKind::ParallelGateway => "ParallelGateway",
            ElementKind::InclusiveGateway => "InclusiveGateway",
            ElementKind::EventBasedGateway => "EventBasedGateway",
            ElementKind::ComplexGateway => "ComplexGateway",
            ElementKind::CallActivity => "CallActivity",
            ElementKind::SubProcess => "SubProcess",
            ElementKind::SequenceFlow => "SequenceFlow",
            ElementKind::MessageFlow => "MessageFlow",
            ElementKind::Pool => "Pool",
            ElementKind::Lane => "Lane",
            ElementKind::DataObject => "DataObject",
            ElementKind::DataStore => "DataStore",
            ElementKind::TextAnnotation => "TextAnnotation",
        }
    }
}

// Suffix rules as observed in the source vocabulary: Event and Gateway
// match case-sensitively, Task matches case-insensitively.
static EVENT_KINDS: LazyLock<Vec<ElementKind>> = LazyLock::new(|| {
    let kinds: Vec<_> = ElementKind::ALL
        .iter()
        .copied()
        .filter(|k| k.name().ends_with("Event"))
        .collect();
    debug!(count = kinds.len(), "event kind set built");
    kinds
});

static TASK_KINDS: LazyLock<Vec<ElementKind>> = LazyLock::new(|| {
    let kinds: Vec<_> = ElementKind::ALL
        .iter()
        .copied()
        .filter(|k| k.name().to_lowercase().ends_with("task"))
        .collect();
    debug!(count = kinds.len(), "task kind set built");
    kinds
});

static GATEWAY_KINDS: LazyLock<Vec<ElementKind>> = LazyLock::new(|| {
    let kinds: Vec<_> = ElementKind::ALL
        .iter()
        .copied()
        .filter(|k| k.name().ends_with("Gateway"))
        .collect();
    debug!(count = kinds.len(), "gateway kind set built");
    kinds
});

/// Kinds whose identifier ends with `Event` (case-sensitive).
pub fn event_kinds() -> &'static [ElementKind] {
    &EVENT_KINDS
}

/// Kinds whose identifier ends with `Task` (case-insensitive).
pub fn task_kinds() -> &'static [ElementKind] {
    &TASK_KINDS
}

/// Kinds whose identifier ends with `Gateway` (case-sensitive).
pub fn gateway_kinds() -> &'static [ElementKind] {
    &GATEWAY_KINDS
}

/// Whether `kind` classifies as an event.
pub fn is_event(kind: ElementKind) -> bool {
    event_kinds().contains(&kind)
}

/// Whether `kind` classifies as a task.
pub fn is_task(kind: ElementKind) -> bool {
    task_kinds().contains(&kind)
}

/// Whether `kind` classifies as a gateway.
pub fn is_gateway(kind: ElementKind) -> bool {
    gateway_kinds().contains(&kind)
}
