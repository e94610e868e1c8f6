//! Interactive command loop over injected I/O
//!
//! The loop owns no terminal: it reads commands from any [`BufRead`] and
//! writes everything to any [`Write`], so sessions are scriptable in
//! tests. The engine and renderer stay pure; this is the only place the
//! three meet.
//!
//! Commands:
//!   add <n>     insert n and show the refreshed diagram
//!   remove      remove the max, show it and the refreshed diagram
//!   print       show the diagram
//!   note: <s>   no-op
//!   exit        leave the loop (EOF also ends it)

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::heap::MaxHeap;
use crate::render::render_diagram;
use crate::tree::{level_order, HeapNode};

/// Run the command loop until `exit` or end of input
///
/// Malformed `add` arguments and unknown commands are ignored;
/// `remove` on an empty heap reports the engine error and keeps going.
pub fn run<R, W>(heap: &mut MaxHeap<i64>, input: R, mut out: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();
    loop {
        write!(out, "Enter command: ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let mut tokens = line.split_whitespace();
        let Some(command) = tokens.next() else {
            continue;
        };
        debug!(command, "dispatching command");

        match command {
            "add" => {
                // A missing or non-numeric argument drops the command
                if let Some(Ok(value)) = tokens.next().map(str::parse::<i64>) {
                    heap.insert(value);
                    writeln!(
                        out,
                        "Added {value}, new tree diagram of heap after bubbling:"
                    )?;
                    print_diagram(heap, &mut out)?;
                }
            }
            "remove" => match heap.remove_max() {
                Ok(removed) => {
                    writeln!(
                        out,
                        "Removed {removed}, new tree diagram of heap after sinking:"
                    )?;
                    print_diagram(heap, &mut out)?;
                }
                Err(error) => writeln!(out, "Cannot remove: {error}.")?,
            },
            "print" => print_diagram(heap, &mut out)?,
            "note:" => {}
            "exit" => break,
            _ => {}
        }
    }

    Ok(())
}

fn print_diagram<W: Write>(heap: &MaxHeap<i64>, out: &mut W) -> io::Result<()> {
    let snapshot = level_order(HeapNode::root(heap));
    write!(out, "{}", render_diagram(&snapshot))
}
