/// Creates a single caller [`Turn`](crate::Turn) from a role shorthand.
///
/// ```rust
/// use toolbridge::{Role, tb_turn};
///
/// let turn = tb_turn!(assistant => "Once upon a time...");
/// assert_eq!(turn.role, Role::Assistant);
/// assert_eq!(turn.content, "Once upon a time...");
/// ```
#[macro_export]
macro_rules! tb_turn {
    (system => $content:expr $(,)?) => {
        $crate::Turn::new($crate::Role::System, $content)
    };
    (user => $content:expr $(,)?) => {
        $crate::Turn::new($crate::Role::User, $content)
    };
    (assistant => $content:expr $(,)?) => {
        $crate::Turn::new($crate::Role::Assistant, $content)
    };
    ($role:ident => $content:expr $(,)?) => {
        compile_error!("unsupported role: use system, user, or assistant");
    };
}

/// Creates a `Vec<Turn>` from role/content pairs.
///
/// ```rust
/// use toolbridge::{Role, tb_turns};
///
/// let turns = tb_turns![
///     system => "You are a storyteller.",
///     user => "Write a story about an elf.",
/// ];
///
/// assert_eq!(turns.len(), 2);
/// assert_eq!(turns[0].role, Role::System);
/// ```
#[macro_export]
macro_rules! tb_turns {
    () => {
        Vec::<$crate::Turn>::new()
    };
    ($($role:ident => $content:expr),+ $(,)?) => {
        vec![$($crate::tb_turn!($role => $content)),+]
    };
}
