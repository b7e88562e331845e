// ==========================================
// 传感器告警模拟 - CSS 选择器
// ==========================================
// 支持子集:
// - 复合选择器: tag / * / #id / .class / [attr] / [attr="v"]
// - 后代组合符: 空白
// - 选择器组: 逗号分隔
// ==========================================

use crate::dom::error::SelectorError;
use std::fmt;

// ==========================================
// Selector - 已解析的选择器组
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    source: String,
    groups: Vec<ComplexSelector>,
}

/// 后代链, 从左到右（祖先 -> 目标）
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ComplexSelector {
    pub(crate) compounds: Vec<CompoundSelector>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct CompoundSelector {
    pub(crate) tag: Option<String>, // None 表示任意标签
    pub(crate) id: Option<String>,
    pub(crate) classes: Vec<String>,
    pub(crate) attributes: Vec<AttributeMatcher>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AttributeMatcher {
    pub(crate) name: String,
    pub(crate) value: Option<String>,
}

impl Selector {
    /// 解析选择器字符串
    pub fn parse(source: &str) -> Result<Self, SelectorError> {
        let mut parser = Parser::new(source);
        let groups = parser.parse_selector_list()?;
        Ok(Self {
            source: source.trim().to_string(),
            groups,
        })
    }

    /// 原始选择器文本
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub(crate) fn groups(&self) -> &[ComplexSelector] {
        &self.groups
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl std::str::FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Selector::parse(s)
    }
}

// ==========================================
// 解析器
// ==========================================
struct Parser<'a> {
    source: &'a str,
    chars: Vec<char>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn is_eof(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// 跳过空白, 返回是否跳过了任何字符
    fn skip_whitespace(&mut self) -> bool {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.pos += 1;
        }
        self.pos > start
    }

    fn unexpected(&self, ch: char) -> SelectorError {
        SelectorError::UnexpectedChar {
            pos: self.pos,
            ch,
            source_text: self.source.to_string(),
        }
    }

    fn unexpected_end(&self) -> SelectorError {
        SelectorError::UnexpectedEnd(self.source.to_string())
    }

    fn expect(&mut self, expected: char) -> Result<(), SelectorError> {
        match self.peek() {
            Some(c) if c == expected => {
                self.pos += 1;
                Ok(())
            }
            Some(c) => Err(self.unexpected(c)),
            None => Err(self.unexpected_end()),
        }
    }

    fn parse_selector_list(&mut self) -> Result<Vec<ComplexSelector>, SelectorError> {
        self.skip_whitespace();
        if self.is_eof() {
            return Err(SelectorError::Empty);
        }

        let mut groups = Vec::new();
        loop {
            self.skip_whitespace();
            groups.push(self.parse_complex()?);
            self.skip_whitespace();
            if self.is_eof() {
                break;
            }
            self.expect(',')?;
        }
        Ok(groups)
    }

    fn parse_complex(&mut self) -> Result<ComplexSelector, SelectorError> {
        let mut compounds = vec![self.parse_compound()?];
        loop {
            let had_whitespace = self.skip_whitespace();
            match self.peek() {
                None | Some(',') => break,
                Some(c) if !had_whitespace => return Err(self.unexpected(c)),
                Some(_) => compounds.push(self.parse_compound()?),
            }
        }
        Ok(ComplexSelector { compounds })
    }

    fn parse_compound(&mut self) -> Result<CompoundSelector, SelectorError> {
        let mut compound = CompoundSelector::default();
        let mut consumed = false;

        match self.peek() {
            Some('*') => {
                self.pos += 1;
                consumed = true;
            }
            Some(c) if is_ident_char(c) => {
                compound.tag = Some(self.parse_ident()?.to_ascii_lowercase());
                consumed = true;
            }
            _ => {}
        }

        loop {
            match self.peek() {
                Some('#') => {
                    self.pos += 1;
                    compound.id = Some(self.parse_ident()?);
                }
                Some('.') => {
                    self.pos += 1;
                    compound.classes.push(self.parse_ident()?);
                }
                Some('[') => {
                    self.pos += 1;
                    compound.attributes.push(self.parse_attribute()?);
                }
                _ => break,
            }
            consumed = true;
        }

        if !consumed {
            return match self.peek() {
                Some(c) => Err(self.unexpected(c)),
                None => Err(self.unexpected_end()),
            };
        }
        Ok(compound)
    }

    fn parse_ident(&mut self) -> Result<String, SelectorError> {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if is_ident_char(c)) {
            self.pos += 1;
        }
        if self.pos == start {
            return match self.peek() {
                Some(c) => Err(self.unexpected(c)),
                None => Err(self.unexpected_end()),
            };
        }
        Ok(self.chars[start..self.pos].iter().collect())
    }

    fn parse_attribute(&mut self) -> Result<AttributeMatcher, SelectorError> {
        self.skip_whitespace();
        let name = self.parse_ident()?.to_ascii_lowercase();
        self.skip_whitespace();

        let value = match self.peek() {
            Some(']') => None,
            Some('=') => {
                self.pos += 1;
                self.skip_whitespace();
                let value = match self.peek() {
                    Some(q @ ('"' | '\'')) => self.parse_quoted(q)?,
                    Some(_) => self.parse_ident()?,
                    None => return Err(self.unexpected_end()),
                };
                self.skip_whitespace();
                Some(value)
            }
            Some(c) => return Err(self.unexpected(c)),
            None => return Err(self.unexpected_end()),
        };

        self.expect(']')?;
        Ok(AttributeMatcher { name, value })
    }

    fn parse_quoted(&mut self, quote: char) -> Result<String, SelectorError> {
        self.pos += 1;
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c == quote {
                let value = self.chars[start..self.pos].iter().collect();
                self.pos += 1;
                return Ok(value);
            }
            self.pos += 1;
        }
        Err(SelectorError::UnterminatedString(self.source.to_string()))
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}
