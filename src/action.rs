use strum::Display;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Action {
  CheckoutSelectedBranch,
  Fetch,
  Quit,
  Render,
  Resize(u16, u16),
  SelectNext,
  SelectPrevious,
}
