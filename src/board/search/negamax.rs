//! The negamax core with its pruning techniques.

use super::constants::{
    FUTILITY_MARGIN, LMR_MIN_DEPTH, LMR_MIN_MOVE_INDEX, NULL_MOVE_BASE_REDUCTION,
    NULL_MOVE_MIN_DEPTH, REVERSE_FUTILITY_MARGIN,
};
use super::{Search, INF_SCORE, MATE_SCORE};
use crate::board::position::Position;
use crate::board::types::{Move, MAX_PLY};
use crate::tt::Bound;

/// Late-move reduction amount: one ply, two for late moves at high depth.
fn lmr_reduction(depth: i32, move_index: usize) -> i32 {
    if depth >= 8 && move_index >= 8 {
        2
    } else {
        1
    }
}

impl Search {
    /// Alpha-beta negamax. Scores are from the side-to-move's perspective;
    /// mates score `MATE_SCORE - ply` / `-MATE_SCORE + ply`.
    #[allow(clippy::too_many_lines)]
    pub(crate) fn negamax(
        &mut self,
        pos: &mut Position,
        mut depth: i32,
        mut alpha: i32,
        mut beta: i32,
        ply: usize,
        allow_null: bool,
    ) -> i32 {
        if self.should_stop() {
            return pos.evaluate();
        }

        self.nodes += 1;

        if pos.is_draw() {
            return 0;
        }

        // Transposition table probe. Mate-range scores are never used for
        // cutoffs (their ply offset belongs to another path), but the stored
        // move still seeds ordering.
        let alpha_orig = alpha;
        let mut tt_move = Move::NULL;
        if let Some(entry) = self.tt.probe(pos.key()) {
            tt_move = entry.best_move;
            if i32::from(entry.depth) >= depth {
                let tt_score = i32::from(entry.score);
                let mate_range = tt_score > MATE_SCORE - MAX_PLY as i32
                    || tt_score < -MATE_SCORE + MAX_PLY as i32;
                if !mate_range {
                    match entry.bound {
                        Bound::Exact => return tt_score,
                        Bound::Lower => alpha = alpha.max(tt_score),
                        Bound::Upper => beta = beta.min(tt_score),
                        Bound::None => {}
                    }
                    if alpha >= beta {
                        return tt_score;
                    }
                }
            }
        }

        if depth <= 0 {
            return self.quiescence(pos, alpha, beta, ply, 0);
        }

        let in_check = pos.side_in_check();

        // Check extension, before the remaining pruning gates.
        if in_check {
            depth += 1;
        }

        // Reverse futility: a static eval far above beta at shallow depth
        // fails high immediately.
        if !in_check && depth <= 3 && ply > 0 {
            let static_eval = pos.evaluate();
            if static_eval - REVERSE_FUTILITY_MARGIN * depth >= beta {
                return static_eval;
            }
        }

        // Null-move pruning: pass the turn at reduced depth. Gated on
        // non-pawn material to avoid zugzwang traps.
        if allow_null
            && !in_check
            && depth >= NULL_MOVE_MIN_DEPTH as i32
            && ply > 0
            && pos.has_non_pawn_material(pos.side_to_move())
        {
            let reduction = NULL_MOVE_BASE_REDUCTION as i32 + depth / 4;
            let null_depth = (depth - 1 - reduction).max(0);

            pos.make_null_move();
            let null_score = -self.negamax(pos, null_depth, -beta, -beta + 1, ply + 1, false);
            pos.unmake_null_move();

            if self.should_stop() {
                return pos.evaluate();
            }
            if null_score >= beta {
                return beta;
            }
        }

        let mut moves = pos.legal_moves();
        if moves.is_empty() {
            return if in_check { -MATE_SCORE + ply as i32 } else { 0 };
        }

        self.order_moves(pos, &mut moves, tt_move, ply);

        let mut best_score = -INF_SCORE;
        let mut best_move = Move::NULL;
        let side = pos.side_to_move().index();

        // Futility: at frontier depths with a hopeless static eval, quiet
        // non-first moves are skipped outright.
        let mut can_futility = false;
        if !in_check && depth <= 2 && ply > 0 {
            can_futility = pos.evaluate() + FUTILITY_MARGIN * depth <= alpha;
        }

        for (i, &m) in moves.iter().enumerate() {
            let is_quiet = m.is_quiet();

            if can_futility && is_quiet && i > 0 && best_score > -MATE_SCORE + MAX_PLY as i32 {
                continue;
            }

            let can_lmr = is_quiet
                && !in_check
                && depth >= LMR_MIN_DEPTH as i32
                && i >= LMR_MIN_MOVE_INDEX
                && (tt_move.is_null() || m != tt_move);

            pos.make_move(m);

            let score = if can_lmr && !pos.side_in_check() {
                // Late move reduction: null-window probe at reduced depth,
                // full re-search on a surprise.
                let reduced = (depth - 1 - lmr_reduction(depth, i)).max(0);
                let probe = -self.negamax(pos, reduced, -alpha - 1, -alpha, ply + 1, true);
                if probe > alpha {
                    -self.negamax(pos, depth - 1, -beta, -alpha, ply + 1, true)
                } else {
                    probe
                }
            } else {
                -self.negamax(pos, depth - 1, -beta, -alpha, ply + 1, true)
            };

            pos.unmake_move(m);

            if score > best_score {
                best_score = score;
                best_move = m;
            }
            if score > alpha {
                alpha = score;
            }
            if alpha >= beta {
                if is_quiet {
                    self.record_killer(m, ply);
                    self.update_history(side, m, depth);
                }
                break;
            }
            if self.should_stop() {
                break;
            }
        }

        // Every move was skipped or the search was interrupted before any
        // move got a score.
        if best_score == -INF_SCORE {
            return pos.evaluate();
        }

        let bound = if best_score <= alpha_orig {
            Bound::Upper
        } else if best_score >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        };
        let static_eval = pos.evaluate();
        self.tt
            .store(pos.key(), depth, best_score, bound, best_move, static_eval);

        best_score
    }
}
