//! 控制台输出服务 - 业务能力层
//!
//! 只负责"把结果打印出来"，不关心流程

use std::io::Write;

use crate::error::AppResult;
use crate::models::{AnalysisReport, AnswerCandidate};

const SEPARATOR: &str = "-------------";

/// 控制台输出
///
/// 分析报告和问答结果都写到同一个输出流（通常是标准输出）
pub struct ConsoleWriter<W: Write> {
    out: W,
}

impl<W: Write> ConsoleWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// 取回内部输出流
    pub fn into_inner(self) -> W {
        self.out
    }

    /// 打印单个文档的分析报告
    ///
    /// 顺序固定：分隔线+文件名、原文、语言、情感、关键短语、实体、链接。
    /// 后三节为空时整节省略。
    pub fn write_report(&mut self, report: &AnalysisReport) -> AppResult<()> {
        writeln!(self.out, "\n{}\n{}", SEPARATOR, report.file_name)?;
        writeln!(self.out, "\n{}", report.text)?;
        writeln!(self.out, "\nLanguage: {}", report.language.name)?;
        writeln!(self.out, "\nSentiment: {}", report.sentiment)?;

        if !report.key_phrases.is_empty() {
            writeln!(self.out, "\nKey Phrases:")?;
            for phrase in &report.key_phrases {
                writeln!(self.out, "\t{}", phrase)?;
            }
        }

        if !report.entities.is_empty() {
            writeln!(self.out, "\nEntities:")?;
            for entity in &report.entities {
                writeln!(self.out, "\t{} ({})", entity.text, entity.category)?;
            }
        }

        if !report.linked_entities.is_empty() {
            writeln!(self.out, "\nLinks:")?;
            for linked in &report.linked_entities {
                writeln!(self.out, "\t{} ({})", linked.name, linked.url)?;
            }
        }

        self.out.flush()?;
        Ok(())
    }

    /// 打印提问提示
    pub fn write_prompt(&mut self) -> AppResult<()> {
        writeln!(self.out, "\nQuestion:")?;
        self.out.flush()?;
        Ok(())
    }

    /// 按服务返回的顺序打印候选答案，每个答案三行
    pub fn write_answers(&mut self, answers: &[AnswerCandidate]) -> AppResult<()> {
        for candidate in answers {
            writeln!(self.out, "{}", candidate.answer)?;
            writeln!(self.out, "Confidence: {}", candidate.confidence)?;
            writeln!(self.out, "Source: {}", candidate.source)?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// 打印顶层错误
    pub fn write_error(&mut self, err: &dyn std::fmt::Display) -> AppResult<()> {
        writeln!(self.out, "{}", err)?;
        self.out.flush()?;
        Ok(())
    }
}
