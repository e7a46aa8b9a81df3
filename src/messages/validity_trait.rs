/// Pre-flight check a collaborator may run before sending or dispatching a
/// header. Constructors never enforce it; the robot has the final word.
pub trait Validity {
  fn valid(&self) -> bool;
}
