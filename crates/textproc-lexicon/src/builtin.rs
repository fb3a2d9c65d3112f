//! Built-in word lists.

pub(crate) const POSITIVE_EN: &[&str] = &[
    "good",
    "great",
    "excellent",
    "amazing",
    "wonderful",
    "fantastic",
    "love",
    "like",
    "happy",
    "satisfied",
    "awesome",
    "perfect",
    "outstanding",
    "brilliant",
    "superb",
    "best",
    "recommended",
    "recommend",
    "nice",
    "enjoy",
    "pleased",
    "delighted",
];

pub(crate) const NEGATIVE_EN: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "hate",
    "dislike",
    "sad",
    "angry",
    "disappointed",
    "horrible",
    "disgusting",
    "annoying",
    "boring",
    "worst",
    "poor",
    "waste",
    "useless",
];

// No entry may begin with an intensifier ("很好", "超棒"): the prefix would be
// swallowed by segmentation and never scale the score.
pub(crate) const POSITIVE_ZH: &[&str] = &[
    "好", "棒", "喜欢", "爱", "满意", "开心", "高兴", "优秀", "完美", "赞", "给力", "惊喜", "优质",
    "精彩", "杰出", "卓越", "出色", "推荐",
];

pub(crate) const NEGATIVE_ZH: &[&str] = &[
    "坏", "差", "糟糕", "讨厌", "恨", "失望", "难过", "生气", "愤怒", "垃圾", "烂", "无聊", "恶心",
    "可怕", "糟", "臭", "破", "烦", "恼火", "郁闷", "错", "浪费",
];

// Contraction stems ("don" from "don't") are listed because the tokenizer
// splits on apostrophes. "won" and "can" are left out: both are ordinary words.
pub(crate) const NEGATORS_EN: &[&str] = &[
    "not", "no", "never", "none", "nobody", "nothing", "neither", "nor", "nowhere", "cannot",
    "without", "don", "doesn", "didn", "isn", "wasn", "aren", "weren", "shouldn", "wouldn",
    "couldn", "haven", "hasn", "hadn",
];

pub(crate) const NEGATORS_ZH: &[&str] = &[
    "不", "没", "没有", "不是", "非", "无", "未", "勿", "别", "莫", "毋", "不用", "不要", "不能",
    "不会", "不可", "不得", "不必", "不该", "不应", "不许",
];

pub(crate) const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.5),
    ("extremely", 2.0),
    ("really", 1.3),
    ("quite", 1.2),
    ("somewhat", 0.8),
    ("slightly", 0.7),
    ("absolutely", 1.8),
    ("totally", 1.6),
    ("incredibly", 1.7),
    ("super", 1.4),
    ("highly", 1.5),
    ("很", 1.3),
    ("非常", 1.6),
    ("极其", 1.8),
    ("超级", 1.5),
    ("特别", 1.4),
    ("相当", 1.2),
    ("比较", 0.8),
    ("有点", 0.7),
    ("稍微", 0.6),
    ("十分", 1.5),
    ("格外", 1.4),
    ("异常", 1.6),
    ("超", 1.4),
    ("巨", 1.5),
    ("贼", 1.3),
    ("太", 1.5),
];

/// Idioms whose sentiment differs from their parts.
pub(crate) const OVERRIDES: &[(&str, f64)] = &[
    ("不错", 1.0),
    ("不坏", 0.5),
    ("没用", -1.0),
    ("不好", -1.0),
    ("还行", 0.3),
    ("不怎么样", -0.8),
    ("好不容易", 0.0),
    ("could be better", -0.5),
    ("could have been better", -0.5),
    ("waste of money", -1.0),
    ("waste of time", -1.0),
    ("too good to be true", -0.5),
];
