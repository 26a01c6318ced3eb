//! 交互式问答 - 编排层
//!
//! 每轮只做一次阻塞读取：提示 → 读一行 → 状态转换 → 查询 → 打印。
//! 输入结束（EOF）与 `quit` 一样结束会话。

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

use crate::clients::KnowledgeBase;
use crate::config::Config;
use crate::error::AppResult;
use crate::services::ConsoleWriter;
use crate::utils::logging::truncate_text;
use crate::workflow::{SessionState, Transition};

/// 问答控制台
pub struct QnaConsole<'a, K: KnowledgeBase + ?Sized> {
    config: &'a Config,
    knowledge_base: &'a K,
}

/// 会话统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub questions: usize,
    pub answers: usize,
}

impl<'a, K: KnowledgeBase + ?Sized> QnaConsole<'a, K> {
    pub fn new(config: &'a Config, knowledge_base: &'a K) -> Self {
        Self {
            config,
            knowledge_base,
        }
    }

    /// 运行问答循环，直到会话结束或出现错误
    pub async fn run<R, W>(&self, input: &mut R, writer: &mut ConsoleWriter<W>) -> AppResult<SessionStats>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        info!(
            "💬 问答会话开始 (项目: {}, 部署: {})",
            self.config.qa_project_name, self.config.qa_deployment_name
        );

        let mut state = SessionState::default();
        let mut stats = SessionStats::default();
        let mut line = String::new();

        while !state.is_terminated() {
            writer.write_prompt()?;

            line.clear();
            if input.read_line(&mut line).await? == 0 {
                debug!("输入已结束");
                state = SessionState::Terminated;
                continue;
            }

            let transition = SessionState::next(&line);
            if let Transition::Ask(question) = &transition {
                debug!("问题: {}", truncate_text(question, 80));

                let answers = self
                    .knowledge_base
                    .get_answers(
                        question,
                        &self.config.qa_project_name,
                        &self.config.qa_deployment_name,
                    )
                    .await?;

                writer.write_answers(&answers)?;

                stats.questions += 1;
                stats.answers += answers.len();
            }
            state = transition.next_state();
        }

        info!(
            "👋 问答会话结束: 问题 {} 个, 答案 {} 个",
            stats.questions, stats.answers
        );

        Ok(stats)
    }
}
