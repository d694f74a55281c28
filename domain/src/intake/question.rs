//! The fixed intake questionnaire

use crate::region::breakdown::Factor;
use serde::Serialize;

/// A one-click answer suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickOption {
    pub id: &'static str,
    pub label: &'static str,
}

/// One intake question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub title: &'static str,
    pub placeholder: &'static str,
    /// Why the question matters for the score
    pub why: &'static str,
    /// Score factors this answer feeds into
    pub affects: &'static [Factor],
    pub example: &'static str,
    pub quick_options: &'static [QuickOption],
}

impl Question {
    pub fn quick_option(&self, id: &str) -> Option<&'static QuickOption> {
        self.quick_options.iter().find(|o| o.id == id)
    }
}

const fn opt(id: &'static str, label: &'static str) -> QuickOption {
    QuickOption { id, label }
}

/// The questions, in the order they are asked
pub const QUESTIONNAIRE: &[Question] = &[
    Question {
        id: "goal",
        title: "어떤 워홀/해외생활을 원해?",
        placeholder: "원하는 걸 줄글로 편하게 적어줘 (선택지 체크만 해도 돼)",
        why: "목표/우선순위는 추천 지역의 가중치(무엇을 더 중요하게 볼지)에 영향을 줘.",
        affects: &[Factor::Job, Factor::Cost, Factor::Visa, Factor::Language],
        example: "예) 돈이 중요하고, 영어도 늘고 싶어. 너무 외진 곳은 싫어.",
        quick_options: &[
            opt("money", "돈을 많이 벌고 싶어"),
            opt("english", "영어 실력을 늘리고 싶어"),
            opt("city", "대도시 선호"),
            opt("safe", "안전/생활 편함이 중요"),
            opt("fun", "문화/여행/재미가 중요"),
        ],
    },
    Question {
        id: "english",
        title: "영어는 어느 정도라고 느껴?",
        placeholder: "예: 완전 초보 / 일상대화 가능 / 업무 가능 ...",
        why: "영어는 ‘적응 난이도’와 ‘일자리 접근성’에 크게 반영돼.",
        affects: &[Factor::Language, Factor::Job],
        example: "예) 주문/길찾기 정도는 가능해. 전화는 어려워.",
        quick_options: &[
            opt("beginner", "완전 초보"),
            opt("basic", "기본 회화 가능"),
            opt("daily", "일상대화 가능"),
            opt("work", "업무 대화 가능"),
            opt("score", "시험 점수 있음"),
        ],
    },
    Question {
        id: "budget",
        title: "초기 정착 예산은 대략 얼마나 잡고 있어?",
        placeholder: "예: 200~300만원 정도, 최대 400까지 가능",
        why: "예산은 ‘비용 리스크(Cost)’ 점수에 반영돼.",
        affects: &[Factor::Cost],
        example: "예) 300만원 있고, 부모님 도움은 없음.",
        quick_options: &[
            opt("b1", "100만원 이하"),
            opt("b2", "100~300만원"),
            opt("b3", "300~600만원"),
            opt("b4", "600만원 이상"),
            opt("unknown", "아직 모르겠어"),
        ],
    },
    Question {
        id: "city",
        title: "도시 vs 소도시(지역) 중 어떤 쪽이 더 좋아?",
        placeholder: "예: 대도시 선호 / 지역도 괜찮음 / 상관없음",
        why: "도시/지역 성향은 비용/일자리 경쟁/체류 전략 판단에 참고돼.",
        affects: &[Factor::Job, Factor::Cost, Factor::Visa],
        example: "예) 너무 외진 곳만 아니면 지역도 괜찮아.",
        quick_options: &[
            opt("metro", "대도시(메트로) 선호"),
            opt("regional", "소도시/지역도 OK"),
            opt("any", "상관없음"),
            opt("lowcost", "비용 낮은 곳 선호"),
            opt("infra", "인프라/편의가 중요"),
        ],
    },
    Question {
        id: "work",
        title: "어떤 일을 하고 싶어? (경험 없어도 선호만)",
        placeholder: "예: 카페/레스토랑, 오피스, IT, 아무거나...",
        why: "선호 직군은 ‘일자리 적합도(Job)’ 판단에 참고돼.",
        affects: &[Factor::Job],
        example: "예) 서비스업 괜찮은데, 밤근무는 싫어.",
        quick_options: &[
            opt("service", "서비스/매장"),
            opt("office", "오피스/사무"),
            opt("it", "IT/개발"),
            opt("any", "아무거나"),
            opt("day", "낮근무 선호"),
        ],
    },
];

/// Look up a question by id
pub fn find_question(id: &str) -> Option<&'static Question> {
    QUESTIONNAIRE.iter().find(|q| q.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_order() {
        let ids: Vec<&str> = QUESTIONNAIRE.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec!["goal", "english", "budget", "city", "work"]);
    }

    #[test]
    fn test_every_question_has_quick_options() {
        for q in QUESTIONNAIRE {
            assert!(!q.quick_options.is_empty(), "{}", q.id);
            assert!(q.quick_options.len() <= 5, "{}", q.id);
            assert!(!q.affects.is_empty(), "{}", q.id);
        }
    }

    #[test]
    fn test_find_question() {
        assert_eq!(find_question("budget").map(|q| q.affects), Some(&[Factor::Cost][..]));
        assert!(find_question("pets").is_none());
    }

    #[test]
    fn test_quick_option_lookup() {
        let english = find_question("english").unwrap();
        assert_eq!(english.quick_option("beginner").unwrap().label, "완전 초보");
        assert!(english.quick_option("fluent").is_none());
    }
}
