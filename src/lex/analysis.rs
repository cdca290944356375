use crate::mistakes::show::Mis;
use crate::mistakes::show::Types;
use crate::mistakes::show::{Froms, LineType};
use std::str::{Chars, Lines};

use super::Tokens;

const EOF: char = '\0';
const EOF_STR: &str = "\0";

/// 词法分析主体
pub struct Analysis<'a> {
    /// 预处理后的源代码行迭代器
    iter_line: Lines<'a>,
    /// 预处理后的源代码字符迭代器
    iter_c: Chars<'a>,
    /// 当前扫描行内容
    line: &'a str,
    /// 当前扫描行号
    line_offset: usize,
    /// 当前扫描行字符偏移量
    c_offset: usize,
    peek: char,
    file: &'a str,
}

impl Iterator for Analysis<'_> {
    type Item = Tokens;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(x) => match x {
                Tokens::Eof => None,
                _ => Some(x),
            },
            Err(e) => {
                println!("{}", e);
                panic!("Lex error")
            }
        }
    }
}

impl<'a> Analysis<'a> {
    pub fn new(file: &'a str, source: &'a str) -> Self {
        let mut me = Analysis {
            file,
            iter_line: source.lines(),
            iter_c: source.chars(),
            line: "",
            line_offset: 1,
            c_offset: 0,
            peek: ' ',
        };
        me.line = match me.iter_line.next() {
            Some(x) => x,
            None => "",
        };
        me
    }

    pub fn get_file(&self) -> &str {
        self.file
    }

    fn readch(&mut self) {
        self.peek = match self.iter_c.next() {
            Some(c) => {
                if c == '\n' {
                    self.line = match self.iter_line.next() {
                        Some(x) => x,
                        None => EOF_STR,
                    };
                    self.line_offset += 1;
                    self.c_offset = 0;
                }
                self.c_offset += 1;
                c
            }
            None => EOF,
        }
    }

    pub fn next_token(&mut self) -> Result<Tokens, Mis> {
        loop {
            if self.peek == ' ' || self.peek == '\n' || self.peek == '\t' || self.peek == '\r' {
                self.readch();
            } else if self.peek == EOF {
                return Ok(Tokens::Eof);
            } else {
                break;
            }
        }
        match self.peek {
            ';' => {
                self.peek = ' ';
                return Ok(Tokens::EndExp);
            }
            ':' => {
                self.peek = ' ';
                return Ok(Tokens::Colon);
            }
            '=' => {
                self.peek = ' ';
                return Ok(Tokens::Is);
            }
            '+' => {
                self.peek = ' ';
                return Ok(Tokens::Plus);
            }
            '-' => {
                self.peek = ' ';
                return Ok(Tokens::Minus);
            }
            '*' => {
                self.peek = ' ';
                return Ok(Tokens::Mul);
            }
            '(' => {
                self.peek = ' ';
                return Ok(Tokens::LeftC);
            }
            ')' => {
                self.peek = ' ';
                return Ok(Tokens::RightC);
            }
            ',' => {
                self.peek = ' ';
                return Ok(Tokens::Comma);
            }
            _ => (),
        }
        if self.peek.is_ascii_digit() {
            // 整常数，词法值保留原文
            let mut c = String::new();
            c.push(self.peek);
            loop {
                self.readch();
                if self.peek.is_ascii_digit() {
                    c.push(self.peek);
                } else {
                    return Ok(Tokens::Const(c));
                }
            }
        }
        if self.peek.is_ascii_alphabetic() {
            let mut c = String::new();
            c.push(self.peek);
            loop {
                self.readch();
                if self.peek.is_ascii_alphanumeric() {
                    c.push(self.peek);
                } else {
                    match c.as_ref() {
                        "VAR" => return Ok(Tokens::Var),
                        "INTEGER" => return Ok(Tokens::Integer),
                        "BEGIN" => return Ok(Tokens::Begin),
                        "END" => return Ok(Tokens::End),
                        "READ" => return Ok(Tokens::Read),
                        "WRITE" => return Ok(Tokens::Write),
                        "FOR" => return Ok(Tokens::For),
                        "TO" => return Ok(Tokens::To),
                        "DO" => return Ok(Tokens::Do),
                        "ENDFOR" => return Ok(Tokens::EndFor),
                        other => return Ok(Tokens::Identity(other.to_string())),
                    }
                }
            }
        }
        let mut e = Mis::new(
            Froms::Lex,
            Types::Error,
            format!("未知符号: {}", self.peek).as_str(),
            self.file,
            None,
        );
        e.add_line(
            self.line_offset,
            "出现未知符号，词法分析无法识别",
            self.line,
            Some(LineType::Happen),
            Some((self.c_offset, 1)),
        );
        Err(e)
    }
}
