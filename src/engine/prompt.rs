// ==========================================
// 业务流程再造建议系统 - 提示词组装
// ==========================================
// 职责: 汇总指标 + 低效标记 + 流程文本 → 提示词
// 红线: 纯格式化,不发起网络调用;流程文本原样嵌入（不截断、不转义）
// ==========================================

use crate::domain::inefficiency::InefficiencyFlag;
use crate::domain::performance::PerformanceSummary;
use crate::domain::report::{ProcessText, Recommendation};
use crate::engine::error::{EngineError, EngineResult};

const PERSONA: &str = "You are an AI Business Process Reengineering Expert for manufacturing. \
Do not hallucinate: base every finding on the performance data and process description below.";

/// 五个固定输出章节
pub const REQUESTED_SECTIONS: [&str; 5] = [
    "Root cause analysis of the detected inefficiencies",
    "Process redesign suggestions (detailed steps)",
    "Automation & digitalization opportunities",
    "Expected impact on cost, quality and time",
    "Industry benchmark comparisons",
];

const NO_FLAGS: &str = "- No inefficiencies detected by the threshold rules.";

/// 上下文中提示词与回复之间的分隔
pub const CONTEXT_RESPONSE_SEPARATOR: &str = "\n\nLLM Response:\n";

// ==========================================
// PromptComposer - 提示词组装器
// ==========================================
pub struct PromptComposer {
    // 无状态
}

impl PromptComposer {
    pub fn new() -> Self {
        Self {}
    }

    /// 组装建议请求提示词
    pub fn compose(
        &self,
        summary: &PerformanceSummary,
        flags: &[InefficiencyFlag],
        process_text: &ProcessText,
    ) -> String {
        let sections = REQUESTED_SECTIONS
            .iter()
            .enumerate()
            .map(|(idx, s)| format!("{}) {}", idx + 1, s))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "{persona}\n\n\
             Performance Summary:\n{summary}\n\n\
             Detected Inefficiencies:\n{flags}\n\n\
             Process Description:\n{process}\n\n\
             Produce a structured improvement report including:\n{sections}\n\n\
             Use Lean and Six Sigma concepts where relevant and be concise and actionable.\n",
            persona = PERSONA,
            summary = summary,
            flags = render_flags(flags),
            process = process_text.as_str(),
            sections = sections,
        )
    }

    /// 运行上下文 = 提示词 + 分隔 + 建议文本
    pub fn compose_context(&self, prompt: &str, recommendation: &Recommendation) -> String {
        format!("{}{}{}", prompt, CONTEXT_RESPONSE_SEPARATOR, recommendation.as_str())
    }

    /// 组装追问提示词
    ///
    /// # 错误
    /// - EngineError::InvalidInput: 问题为空白
    pub fn compose_followup(&self, context: &str, question: &str) -> EngineResult<String> {
        let question = question.trim();
        if question.is_empty() {
            return Err(EngineError::InvalidInput("追问内容不能为空".to_string()));
        }

        Ok(format!(
            "{}\n\nUser follow-up question: {}\nAnswer concisely based on the context.",
            context, question
        ))
    }
}

impl Default for PromptComposer {
    fn default() -> Self {
        Self::new()
    }
}

/// 标记列表的文本表示（每行一条,规范顺序）
pub fn render_flags(flags: &[InefficiencyFlag]) -> String {
    if flags.is_empty() {
        return NO_FLAGS.to_string();
    }
    flags
        .iter()
        .map(|f| format!("- {}", f.message()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> PerformanceSummary {
        PerformanceSummary {
            avg_cycle_time: 121.5,
            defect_rate: 0.062,
            machine_downtime: 155.0,
            throughput: 60900,
        }
    }

    #[test]
    fn test_prompt_embeds_process_text_verbatim() {
        let raw = "Line A:\n  {flags} \"quoted\" <tag> & 100%\n\tTabbed step\n";
        let prompt = PromptComposer::new().compose(
            &summary(),
            &[InefficiencyFlag::ExcessiveDowntime],
            &ProcessText::new(raw),
        );

        assert!(prompt.contains(raw));
        // 流程文本中的占位样式不应被替换
        assert!(prompt.contains("{flags}"));
    }

    #[test]
    fn test_prompt_contains_persona_summary_flags_and_sections() {
        let flags = vec![InefficiencyFlag::HighDefectRate, InefficiencyFlag::SlowCycleTime];
        let prompt =
            PromptComposer::new().compose(&summary(), &flags, &ProcessText::new("Assemble"));

        assert!(prompt.starts_with("You are an AI Business Process Reengineering Expert for manufacturing."));
        assert!(prompt.contains(&summary().to_string()));
        assert!(prompt.contains(
            "- High defect rate in assembly line.\n- Cycle time exceeds industry benchmark (120 mins)."
        ));
        for section in REQUESTED_SECTIONS {
            assert!(prompt.contains(section), "missing section: {}", section);
        }
        assert!(prompt.contains("5) Industry benchmark comparisons"));
    }

    #[test]
    fn test_prompt_without_flags() {
        let prompt = PromptComposer::new().compose(&summary(), &[], &ProcessText::new(""));
        assert!(prompt.contains(NO_FLAGS));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let composer = PromptComposer::new();
        let text = ProcessText::new("Paint");
        let flags = [InefficiencyFlag::ExcessiveDowntime];
        assert_eq!(
            composer.compose(&summary(), &flags, &text),
            composer.compose(&summary(), &flags, &text)
        );
    }

    #[test]
    fn test_followup_prompt() {
        let composer = PromptComposer::new();
        let context = composer.compose_context("PROMPT", &Recommendation::new("ANSWER"));
        assert_eq!(context, "PROMPT\n\nLLM Response:\nANSWER");

        let followup = composer
            .compose_followup(&context, "  What about shift patterns? ")
            .unwrap();
        assert!(followup.starts_with(&context));
        assert!(followup.ends_with(
            "User follow-up question: What about shift patterns?\nAnswer concisely based on the context."
        ));
    }

    #[test]
    fn test_followup_rejects_blank_question() {
        let result = PromptComposer::new().compose_followup("ctx", "   ");
        assert!(matches!(result, Err(EngineError::InvalidInput(_))));
    }
}
