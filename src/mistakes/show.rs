use std::fmt::{Display, Formatter};

/// 来源
#[derive(PartialEq, Debug)]
pub enum Froms {
    Lex,
    Syntax,
    Semantic
}

impl Display for Froms {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Froms::Lex => write!(f, "词法分析阶段"),
            Froms::Syntax => write!(f, "语法分析阶段"),
            Froms::Semantic => write!(f, "语义分析阶段"),
        }
    }
}

/// 类型
#[derive(PartialEq, Debug)]
pub enum Types {
    Info,
    Warning,
    Error
}

impl Display for Types {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Types::Info => write!(f, "信息"),
            Types::Warning => write!(f, "警告"),
            Types::Error => write!(f, "错误"),
        }
    }
}

/// 各行的类型
#[derive(PartialEq, Debug)]
pub enum LineType {
    Note,
    Happen,
    Relate
}

/// 错误类型
/// 1. 分析出错行数和偏移量
/// 2. 发生错误的位置和报错
/// 3. 和错误有关的位置的提示（往往是引起错误的，或者是一些帮助修改的提示性信息）
#[derive(PartialEq, Debug)]
pub struct Mis {
    who: Froms,
    /// 类型
    wtype: Types,
    /// 介绍
    intro: String,
    file: String,
    /// 行号，各行类型，起始位置，偏移量，提示信息，具体代码
    lines: Option<Vec<(usize, Option<LineType>, Option<(usize, usize)>, String, String)>>,
}

impl Mis {
    pub fn new(who: Froms, wtype: Types, intro: &str, file: &str, lines: Option<Vec<(usize, Option<LineType>, Option<(usize, usize)>, String, String)>>) -> Self {
        Mis { who, wtype, intro: intro.to_string(), file: file.to_string(), lines }
    }

    pub fn add_line(&mut self, line: usize, info: &str, code: &str, line_type: Option<LineType>, pos: Option<(usize, usize)>) {
        let g = (line, line_type, pos, info.to_string(), code.to_string());
        match &mut self.lines {
            Some(x) => x.push(g),
            None => {
                self.lines = Some(vec![g])
            }
        }
    }

    pub fn get_who(&self) -> &Froms {
        &self.who
    }

    pub fn get_intro(&self) -> &String {
        &self.intro
    }
}

impl Display for Mis {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // 出错行号
        let mut l = String::new();
        // 提示信息
        let mut s = String::new();
        let width: usize = 6;
        if let Some(x) = &self.lines {
            s.push_str(format!("{:width$}|\n", ' ', width = width).as_str());
            for (line, line_type, pos, info, code) in x {
                let start_from: usize;
                let how_many: usize;
                let stand;
                l.push_str(format!("{}", line).as_str());
                match *pos {
                    Some(x) => {
                        let (start, offset) = x;
                        l.push_str(format!(":{}", start).as_str());
                        start_from = start.saturating_sub(1);
                        how_many = offset;
                    },
                    None => {
                        start_from = 0;
                        how_many = 1;
                    }
                }
                l.push(';');
                match line_type {
                    Some(x) => {
                        match x {
                            LineType::Note => stand = '*',
                            LineType::Happen => stand = '^',
                            LineType::Relate => stand = '&'
                        }
                    },
                    None => {
                        stand = '-'
                    }
                }
                s.push_str(format!("{:width$}|\t{}\n", line, code, width = width).as_str());
                s.push_str(format!("{:width$}|\t{:from$}", "", "", width = width, from = start_from).as_str());
                for _ in 1..=how_many {
                    s.push(stand);
                }
                s.push_str(format!("-->{}\n", info).as_str());
            }
        }
        write!(f, "{} from {}: {}\n In {}:{}\n{}", self.wtype, self.who, self.intro, self.file, l, s)
    }
}

#[cfg(test)]
mod show_tests {
    use super::*;

    #[test]
    fn test_display_with_line() {
        let mut e = Mis::new(Froms::Lex, Types::Error, "未知符号", "t.mp", None);
        e.add_line(1, "出现未知符号", "VAR x @ INTEGER;", Some(LineType::Happen), Some((7, 1)));
        let shown = format!("{}", e);
        assert!(shown.contains("错误"));
        assert!(shown.contains("词法分析阶段"));
        assert!(shown.contains("未知符号"));
        assert!(shown.contains("t.mp"));
        assert!(shown.contains('^'));
    }

    #[test]
    fn test_display_without_line() {
        let e = Mis::new(Froms::Syntax, Types::Error, "非法词法单元", "t.mp", None);
        let shown = format!("{}", e);
        assert!(shown.contains("语法分析阶段"));
        assert!(shown.contains("非法词法单元"));
    }
}
