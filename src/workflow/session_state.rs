//! 问答会话状态机
//!
//! 只有两个状态：等待输入 / 已结束。状态转换是纯函数，与读写控制台无关。

/// 退出指令（不区分大小写）
pub const QUIT_SENTINEL: &str = "quit";

/// 会话状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    AwaitingInput,
    Terminated,
}

/// 一次输入引起的状态转换
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// 原样转发给知识库的问题，之后继续等待输入
    Ask(String),
    /// 结束会话
    Quit,
}

impl Transition {
    pub fn next_state(&self) -> SessionState {
        match self {
            Transition::Ask(_) => SessionState::AwaitingInput,
            Transition::Quit => SessionState::Terminated,
        }
    }
}

impl SessionState {
    /// 根据一行输入决定下一步
    ///
    /// 只去掉行尾换行符，其他空白保留，所以 `" quit"` 会被当作问题。
    /// 空字符串同样被当作问题转发。
    pub fn next(input: &str) -> Transition {
        let line = input.strip_suffix('\n').unwrap_or(input);
        let line = line.strip_suffix('\r').unwrap_or(line);

        if line.eq_ignore_ascii_case(QUIT_SENTINEL) {
            Transition::Quit
        } else {
            Transition::Ask(line.to_string())
        }
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self, SessionState::Terminated)
    }
}
