use im::Vector;

use crate::core::player::Player;
use crate::core::rng::GameRng;

/// Return a shuffled copy of `cards`.
pub fn shuffle<T: Clone>(cards: &Vector<T>, rng: &mut GameRng) -> Vector<T> {
    let mut buf: Vec<T> = cards.iter().cloned().collect();
    rng.shuffle(&mut buf);
    buf.into_iter().collect()
}

/// Draw up to `n` cards into hand.
///
/// When the draw pile empties mid-draw the discard pile is shuffled into a
/// new draw pile. Drawing stops early when both are empty. Returns the
/// number of cards drawn.
pub fn draw_n(player: &mut Player, n: usize, rng: &mut GameRng) -> usize {
    let mut drawn = 0;

    while drawn < n {
        if player.draw_pile.is_empty() {
            if player.discard_pile.is_empty() {
                log::trace!("draw stopped after {drawn} of {n}: no cards left");
                break;
            }
            let discard = std::mem::take(&mut player.discard_pile);
            player.draw_pile = shuffle(&discard, rng);
            log::trace!("reshuffled {} discarded cards into the draw pile", player.draw_pile.len());
        }

        let Some(card) = player.draw_pile.pop_front() else {
            break;
        };
        player.hand.push_back(card);
        drawn += 1;
    }

    drawn
}
