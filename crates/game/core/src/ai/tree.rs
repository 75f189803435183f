//! Minimal behavior tree for turn-based decisions.
//!
//! Every tick completes immediately: a node either succeeds or fails, there
//! is no running state. Trees are generic over a blackboard `C` that nodes
//! read from and write their decision into.

/// Result of evaluating a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Success,
    Failure,
}

impl Status {
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }

    pub const fn invert(self) -> Self {
        match self {
            Self::Success => Self::Failure,
            Self::Failure => Self::Success,
        }
    }
}

impl From<bool> for Status {
    fn from(value: bool) -> Self {
        if value { Self::Success } else { Self::Failure }
    }
}

/// A behavior tree node evaluated against a blackboard.
pub trait Behavior<C>: Send + Sync {
    fn tick(&self, ctx: &mut C) -> Status;
}

impl<C> Behavior<C> for Box<dyn Behavior<C>> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }
}

/// Runs children left to right until one fails (logical AND).
pub struct Sequence<C> {
    children: Vec<Box<dyn Behavior<C>>>,
}

impl<C> Sequence<C> {
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        Self { children }
    }
}

impl<C> Behavior<C> for Sequence<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        for child in &self.children {
            if child.tick(ctx) == Status::Failure {
                return Status::Failure;
            }
        }
        Status::Success
    }
}

/// Runs children left to right until one succeeds (logical OR).
///
/// An empty selector fails.
pub struct Selector<C> {
    children: Vec<Box<dyn Behavior<C>>>,
}

impl<C> Selector<C> {
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        Self { children }
    }
}

impl<C> Behavior<C> for Selector<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        for child in &self.children {
            if child.tick(ctx) == Status::Success {
                return Status::Success;
            }
        }
        Status::Failure
    }
}

/// Guarded branch that commits once its guard holds.
///
/// If `when` fails the branch fails and a parent selector moves on. If
/// `when` succeeds the branch succeeds whatever `then` returns, so later
/// siblings are skipped even when `then` found nothing to do.
pub struct Branch<C> {
    when: Box<dyn Behavior<C>>,
    then: Box<dyn Behavior<C>>,
}

impl<C> Branch<C> {
    pub fn new(when: Box<dyn Behavior<C>>, then: Box<dyn Behavior<C>>) -> Self {
        Self { when, then }
    }
}

impl<C> Behavior<C> for Branch<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        if self.when.tick(ctx) == Status::Failure {
            return Status::Failure;
        }
        let _ = self.then.tick(ctx);
        Status::Success
    }
}

/// Inverts its child.
pub struct Inverter<C> {
    child: Box<dyn Behavior<C>>,
}

impl<C> Inverter<C> {
    pub fn new(child: Box<dyn Behavior<C>>) -> Self {
        Self { child }
    }
}

impl<C> Behavior<C> for Inverter<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        self.child.tick(ctx).invert()
    }
}

// ============================================================================
// Builders
// ============================================================================

#[inline]
pub fn sequence<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Sequence::new(children))
}

#[inline]
pub fn selector<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Selector::new(children))
}

#[inline]
pub fn branch<C: 'static>(
    when: Box<dyn Behavior<C>>,
    then: Box<dyn Behavior<C>>,
) -> Box<dyn Behavior<C>> {
    Box::new(Branch::new(when, then))
}

#[inline]
pub fn inverter<C: 'static>(child: Box<dyn Behavior<C>>) -> Box<dyn Behavior<C>> {
    Box::new(Inverter::new(child))
}
