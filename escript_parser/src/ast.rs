//! ESTree-shaped AST node definitions
//!
//! Every node is a struct carrying a `span` and serializes to the ESTree
//! JSON shape: an internally tagged `"type"` field followed by the node's
//! structural fields. The `Expression`/`Statement`/`Pattern` enums are
//! untagged unions over those structs.
//!
//! Holes in array literals and array patterns are `None` elements. A
//! `Pattern` may also hold a plain expression: the expression→pattern
//! reinterpreter is shallow-structural and leaves member expressions and
//! other non-pattern targets unchanged.

use serde::Serialize;

use crate::span::Span;

/// Whether a program was parsed as a script or a module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Script,
    Module,
}

/// `var` / `let` / `const`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableKind {
    Var,
    Let,
    Const,
}

/// Object literal property kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    Init,
    Get,
    Set,
}

/// Class method kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodKind {
    Constructor,
    Method,
    Get,
    Set,
}

// ==================== Program ====================

/// Root node of a parse
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct Program {
    pub source_type: SourceType,
    pub body: Vec<Statement>,
    pub span: Span,
}

impl Program {
    /// Serialize the tree to ESTree-shaped JSON
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).expect("AST serialization is infallible")
    }
}

// ==================== Statements ====================

/// Statement, declaration, or module item
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Statement {
    Block(BlockStatement),
    VariableDeclaration(VariableDeclaration),
    Empty(EmptyStatement),
    If(IfStatement),
    DoWhile(DoWhileStatement),
    While(WhileStatement),
    For(ForStatement),
    ForIn(ForInStatement),
    ForOf(ForOfStatement),
    Continue(ContinueStatement),
    Break(BreakStatement),
    Return(ReturnStatement),
    With(WithStatement),
    Switch(SwitchStatement),
    Labeled(LabeledStatement),
    Throw(ThrowStatement),
    Try(TryStatement),
    Debugger(DebuggerStatement),
    Expression(ExpressionStatement),
    FunctionDeclaration(FunctionDeclaration),
    ClassDeclaration(ClassDeclaration),
    Import(ImportDeclaration),
    ExportAll(ExportAllDeclaration),
    ExportDefault(ExportDefaultDeclaration),
    ExportNamed(ExportNamedDeclaration),
}

impl Statement {
    /// Source span of the statement
    pub fn span(&self) -> Span {
        match self {
            Statement::Block(n) => n.span,
            Statement::VariableDeclaration(n) => n.span,
            Statement::Empty(n) => n.span,
            Statement::If(n) => n.span,
            Statement::DoWhile(n) => n.span,
            Statement::While(n) => n.span,
            Statement::For(n) => n.span,
            Statement::ForIn(n) => n.span,
            Statement::ForOf(n) => n.span,
            Statement::Continue(n) => n.span,
            Statement::Break(n) => n.span,
            Statement::Return(n) => n.span,
            Statement::With(n) => n.span,
            Statement::Switch(n) => n.span,
            Statement::Labeled(n) => n.span,
            Statement::Throw(n) => n.span,
            Statement::Try(n) => n.span,
            Statement::Debugger(n) => n.span,
            Statement::Expression(n) => n.span,
            Statement::FunctionDeclaration(n) => n.span,
            Statement::ClassDeclaration(n) => n.span,
            Statement::Import(n) => n.span,
            Statement::ExportAll(n) => n.span,
            Statement::ExportDefault(n) => n.span,
            Statement::ExportNamed(n) => n.span,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct BlockStatement {
    pub body: Vec<Statement>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct VariableDeclaration {
    pub kind: VariableKind,
    pub declarations: Vec<VariableDeclarator>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct VariableDeclarator {
    pub id: Pattern,
    pub init: Option<Expression>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct EmptyStatement {
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct IfStatement {
    pub test: Expression,
    pub consequent: Box<Statement>,
    pub alternate: Option<Box<Statement>>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct DoWhileStatement {
    pub body: Box<Statement>,
    pub test: Expression,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct WhileStatement {
    pub test: Expression,
    pub body: Box<Statement>,
    pub span: Span,
}

/// Init clause of a C-style `for` head
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ForInit {
    VariableDeclaration(VariableDeclaration),
    Expression(Expression),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ForStatement {
    pub init: Option<ForInit>,
    pub test: Option<Expression>,
    pub update: Option<Expression>,
    pub body: Box<Statement>,
    pub span: Span,
}

/// Left side of a `for-in` / `for-of` head
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ForTarget {
    VariableDeclaration(VariableDeclaration),
    Pattern(Pattern),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ForInStatement {
    pub left: ForTarget,
    pub right: Expression,
    pub body: Box<Statement>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ForOfStatement {
    pub left: ForTarget,
    pub right: Expression,
    pub body: Box<Statement>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ContinueStatement {
    pub label: Option<Identifier>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct BreakStatement {
    pub label: Option<Identifier>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ReturnStatement {
    pub argument: Option<Expression>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct WithStatement {
    pub object: Expression,
    pub body: Box<Statement>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct SwitchStatement {
    pub discriminant: Expression,
    pub cases: Vec<SwitchCase>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct SwitchCase {
    /// `None` for the `default` clause
    pub test: Option<Expression>,
    pub consequent: Vec<Statement>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct LabeledStatement {
    pub label: Identifier,
    pub body: Box<Statement>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ThrowStatement {
    pub argument: Expression,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct TryStatement {
    pub block: BlockStatement,
    pub handler: Option<CatchClause>,
    pub finalizer: Option<BlockStatement>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct CatchClause {
    pub param: Pattern,
    pub body: BlockStatement,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct DebuggerStatement {
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ExpressionStatement {
    pub expression: Expression,
    pub span: Span,
}

// ==================== Declarations ====================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct FunctionDeclaration {
    /// `None` only for `export default function () {}`
    pub id: Option<Identifier>,
    pub params: Vec<Pattern>,
    pub body: BlockStatement,
    pub generator: bool,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ClassDeclaration {
    /// `None` only for `export default class {}`
    pub id: Option<Identifier>,
    pub super_class: Option<Box<Expression>>,
    pub body: ClassBody,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ClassBody {
    pub body: Vec<MethodDefinition>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct MethodDefinition {
    pub key: Expression,
    pub value: FunctionExpression,
    pub kind: MethodKind,
    pub computed: bool,
    #[serde(rename = "static")]
    pub is_static: bool,
    pub span: Span,
}

// ==================== Module Items ====================

/// Specifier of an `import` declaration
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ImportDeclarationSpecifier {
    Default(ImportDefaultSpecifier),
    Namespace(ImportNamespaceSpecifier),
    Named(ImportSpecifier),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ImportDeclaration {
    pub specifiers: Vec<ImportDeclarationSpecifier>,
    pub source: Literal,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ImportDefaultSpecifier {
    pub local: Identifier,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ImportNamespaceSpecifier {
    pub local: Identifier,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ImportSpecifier {
    pub imported: Identifier,
    pub local: Identifier,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ExportAllDeclaration {
    pub source: Literal,
    pub span: Span,
}

/// Target of an `export default`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExportDefaultTarget {
    Function(FunctionDeclaration),
    Class(ClassDeclaration),
    Expression(Expression),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ExportDefaultDeclaration {
    pub declaration: ExportDefaultTarget,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ExportNamedDeclaration {
    pub declaration: Option<Box<Statement>>,
    pub specifiers: Vec<ExportSpecifier>,
    pub source: Option<Literal>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ExportSpecifier {
    pub local: Identifier,
    pub exported: Identifier,
    pub span: Span,
}

// ==================== Expressions ====================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Expression {
    This(ThisExpression),
    Identifier(Identifier),
    Literal(Literal),
    Array(ArrayExpression),
    Object(ObjectExpression),
    Function(FunctionExpression),
    ArrowFunction(ArrowFunctionExpression),
    Class(ClassExpression),
    Member(MemberExpression),
    Call(CallExpression),
    New(NewExpression),
    TaggedTemplate(TaggedTemplateExpression),
    TemplateLiteral(TemplateLiteral),
    Unary(UnaryExpression),
    Update(UpdateExpression),
    Binary(BinaryExpression),
    Logical(LogicalExpression),
    Assignment(AssignmentExpression),
    Conditional(ConditionalExpression),
    Sequence(SequenceExpression),
    Spread(SpreadElement),
    Yield(YieldExpression),
    Super(Super),
    MetaProperty(MetaProperty),
    Parenthesized(ParenthesizedExpression),
}

impl Expression {
    /// Source span of the expression
    pub fn span(&self) -> Span {
        match self {
            Expression::This(n) => n.span,
            Expression::Identifier(n) => n.span,
            Expression::Literal(n) => n.span,
            Expression::Array(n) => n.span,
            Expression::Object(n) => n.span,
            Expression::Function(n) => n.span,
            Expression::ArrowFunction(n) => n.span,
            Expression::Class(n) => n.span,
            Expression::Member(n) => n.span,
            Expression::Call(n) => n.span,
            Expression::New(n) => n.span,
            Expression::TaggedTemplate(n) => n.span,
            Expression::TemplateLiteral(n) => n.span,
            Expression::Unary(n) => n.span,
            Expression::Update(n) => n.span,
            Expression::Binary(n) => n.span,
            Expression::Logical(n) => n.span,
            Expression::Assignment(n) => n.span,
            Expression::Conditional(n) => n.span,
            Expression::Sequence(n) => n.span,
            Expression::Spread(n) => n.span,
            Expression::Yield(n) => n.span,
            Expression::Super(n) => n.span,
            Expression::MetaProperty(n) => n.span,
            Expression::Parenthesized(n) => n.span,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ThisExpression {
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Identifier {
    pub name: String,
    pub span: Span,
}

/// Value of a `Literal` node
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LiteralValue {
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
}

/// Regular expression data on a `Literal` node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegexData {
    pub pattern: String,
    pub flags: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Literal {
    /// `Null` for regular expression literals
    pub value: LiteralValue,
    pub raw: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regex: Option<RegexData>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ArrayExpression {
    /// `None` elements are elisions
    pub elements: Vec<Option<Expression>>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ObjectExpression {
    pub properties: Vec<Property>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Property {
    pub key: Expression,
    pub value: Expression,
    pub kind: PropertyKind,
    pub method: bool,
    pub shorthand: bool,
    pub computed: bool,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct FunctionExpression {
    pub id: Option<Identifier>,
    pub params: Vec<Pattern>,
    pub body: BlockStatement,
    pub generator: bool,
    pub span: Span,
}

/// Body of an arrow function: block or concise expression
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ArrowBody {
    Block(BlockStatement),
    Expression(Box<Expression>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ArrowFunctionExpression {
    pub params: Vec<Pattern>,
    pub body: ArrowBody,
    /// True for the concise (expression) body form
    pub expression: bool,
    pub generator: bool,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ClassExpression {
    pub id: Option<Identifier>,
    pub super_class: Option<Box<Expression>>,
    pub body: ClassBody,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct MemberExpression {
    pub object: Box<Expression>,
    pub property: Box<Expression>,
    pub computed: bool,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct CallExpression {
    pub callee: Box<Expression>,
    pub arguments: Vec<Expression>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct NewExpression {
    pub callee: Box<Expression>,
    pub arguments: Vec<Expression>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct TaggedTemplateExpression {
    pub tag: Box<Expression>,
    pub quasi: TemplateLiteral,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct TemplateLiteral {
    pub quasis: Vec<TemplateElement>,
    pub expressions: Vec<Expression>,
    pub span: Span,
}

/// Raw and cooked text of a template element
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateElementValue {
    pub raw: String,
    pub cooked: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct TemplateElement {
    pub value: TemplateElementValue,
    pub tail: bool,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct UnaryExpression {
    pub operator: String,
    pub prefix: bool,
    pub argument: Box<Expression>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct UpdateExpression {
    pub operator: String,
    pub prefix: bool,
    pub argument: Box<Expression>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct BinaryExpression {
    pub operator: String,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct LogicalExpression {
    pub operator: String,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct AssignmentExpression {
    pub operator: String,
    pub left: Box<Pattern>,
    pub right: Box<Expression>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ConditionalExpression {
    pub test: Box<Expression>,
    pub consequent: Box<Expression>,
    pub alternate: Box<Expression>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct SequenceExpression {
    pub expressions: Vec<Expression>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct SpreadElement {
    pub argument: Box<Expression>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct YieldExpression {
    pub argument: Option<Box<Expression>>,
    /// Only set when an argument is present
    pub delegate: bool,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Super {
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct MetaProperty {
    pub meta: Identifier,
    pub property: Identifier,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ParenthesizedExpression {
    pub expression: Box<Expression>,
    pub span: Span,
}

// ==================== Patterns ====================

/// Binding or assignment target
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Pattern {
    Identifier(Identifier),
    Array(ArrayPattern),
    Object(ObjectPattern),
    Assignment(Box<AssignmentPattern>),
    Rest(Box<RestElement>),
    /// Non-pattern assignment target (e.g. a member expression) left
    /// unchanged by the reinterpreter
    Expression(Box<Expression>),
}

impl Pattern {
    /// Source span of the pattern
    pub fn span(&self) -> Span {
        match self {
            Pattern::Identifier(n) => n.span,
            Pattern::Array(n) => n.span,
            Pattern::Object(n) => n.span,
            Pattern::Assignment(n) => n.span,
            Pattern::Rest(n) => n.span,
            Pattern::Expression(n) => n.span(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ArrayPattern {
    /// `None` elements are elisions
    pub elements: Vec<Option<Pattern>>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ObjectPattern {
    pub properties: Vec<AssignmentProperty>,
    pub span: Span,
}

/// Property of an object pattern (serializes as a `Property` with
/// `kind: "init"`, `method: false`)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Property")]
pub struct AssignmentProperty {
    pub key: Expression,
    pub value: Pattern,
    pub kind: PropertyKind,
    pub method: bool,
    pub shorthand: bool,
    pub computed: bool,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct AssignmentPattern {
    pub left: Pattern,
    pub right: Expression,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct RestElement {
    pub argument: Pattern,
    pub span: Span,
}
